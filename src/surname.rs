use smallvec::SmallVec;

// Sorted longest first at build time
static COMPOUND_PARTICLES: &[&str] =
    include!(concat!(env!("OUT_DIR"), "/compound_particles.rs"));

fn is_same_particle(word: &str, particle: &str) -> bool {
    word.trim_end_matches('.')
        .eq_ignore_ascii_case(particle.trim_end_matches('.'))
}

/// Index of the first word of the surname, given the name's words with
/// salutations and suffixes already removed; `words.len()` means no surname.
///
/// The surname is the last word, plus at most one compound particle ("Von",
/// "De La") immediately before it. A particle is never taken from the first
/// word, which is always the given name.
pub fn find_surname_index(words: &[&str]) -> usize {
    if words.len() < 2 {
        return words.len();
    }

    let last = words.len() - 1;
    for particle in COMPOUND_PARTICLES {
        let particle_words: SmallVec<[&str; 2]> = particle.split(' ').collect();
        let len = particle_words.len();
        if last <= len {
            continue;
        }

        let candidate = &words[last - len..last];
        if candidate
            .iter()
            .zip(particle_words.iter())
            .all(|(word, particle)| is_same_particle(word, particle))
        {
            return last - len;
        }
    }

    // Default case: just assume the last word is the surname
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_words() {
        assert_eq!(0, find_surname_index(&[]));
    }

    #[test]
    fn one_word() {
        assert_eq!(1, find_surname_index(&["Finn"]));
    }

    #[test]
    fn two_words() {
        assert_eq!(1, find_surname_index(&["Ryland", "Jones"]));
    }

    #[test]
    fn three_words() {
        assert_eq!(2, find_surname_index(&["Martin", "Luther", "King"]));
    }

    #[test]
    fn particle() {
        assert_eq!(2, find_surname_index(&["Anthony", "R.", "Von", "Fange"]));
        assert_eq!(1, find_surname_index(&["Ludwig", "van", "Beethoven"]));
    }

    #[test]
    fn two_word_particle_preferred() {
        assert_eq!(1, find_surname_index(&["Maria", "De", "La", "Cruz"]));
        assert_eq!(1, find_surname_index(&["Pieter", "Van", "Der", "Berg"]));
    }

    #[test]
    fn only_one_particle() {
        assert_eq!(2, find_surname_index(&["Jan", "Van", "De", "Berg"]));
    }

    #[test]
    fn particle_with_period() {
        assert_eq!(1, find_surname_index(&["Ruth", "St", "Denis"]));
        assert_eq!(1, find_surname_index(&["Ruth", "St.", "Denis"]));
    }

    #[test]
    fn given_name_is_not_a_particle() {
        assert_eq!(1, find_surname_index(&["Van", "Morrison"]));
        // "De La" would swallow the given name, so only "La" is taken
        assert_eq!(1, find_surname_index(&["De", "La", "Soul"]));
    }

    #[test]
    fn particle_must_precede_surname() {
        assert_eq!(3, find_surname_index(&["Anthony", "Van", "R.", "Fange"]));
    }
}
