// The mapping tables pad unused slots with zero, and a char with no mapping
// comes back as all zeros. Mappings that expand to several chars ("ß" to
// "Ss") are not taken, so a word keeps its length in letters.
#[inline]
fn single_char(mapped: [u32; 3], c: char) -> char {
    match mapped {
        [x, 0, 0] if x > 0 => char::from_u32(x).unwrap_or(c),
        _ => c,
    }
}

#[inline]
fn titlecase(c: char) -> char {
    single_char(unicode_case_mapping::to_titlecase(c), c)
}

#[inline]
fn uppercase(c: char) -> char {
    single_char(unicode_case_mapping::to_uppercase(c), c)
}

/// Title-cases the first character of every whitespace-separated word.
///
/// The rest of each word is left as it is: canonical dictionary forms like
/// "PhD" or "III", and names like "McCain", must survive this pass intact.
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut capitalize_next = true;

    for c in text.chars() {
        if capitalize_next {
            result.push(titlecase(c));
        } else {
            result.push(c);
        }
        capitalize_next = c.is_whitespace();
    }

    result
}

/// Upper-cases a lone letter and gives it a trailing period, e.g. "c" to "C.".
pub fn initial(c: char) -> String {
    let mut result = String::with_capacity(c.len_utf8() + 1);
    result.push(uppercase(c));
    result.push('.');
    result
}
