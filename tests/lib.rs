extern crate name_parts;

use name_parts::{Name, NameParser};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

struct Expected {
    input: String,
    full: String,
    salutation: String,
    first: String,
    middle: String,
    last: String,
    suffix: String,
}

fn parseable_names() -> Vec<Expected> {
    let f = File::open("tests/parseable-names.txt").ok().unwrap();
    let reader = BufReader::new(f);

    reader
        .lines()
        .map(|line| line.ok().unwrap())
        .filter(|line| !line.starts_with('#') && line.contains('|'))
        .map(|line| {
            let parts: Vec<&str> = line.split('|').collect();
            assert_eq!(7, parts.len(), "Malformed fixture line: {}", line);
            Expected {
                input: parts[0].to_string(),
                full: parts[1].to_string(),
                salutation: parts[2].to_string(),
                first: parts[3].to_string(),
                middle: parts[4].to_string(),
                last: parts[5].to_string(),
                suffix: parts[6].to_string(),
            }
        })
        .collect()
}

fn assert_parts(name: &Name, expected: &Expected, input: &str) {
    assert!(name.full() == expected.full,
            "[{}] Expected full {:?}, got {:?}",
            input,
            expected.full,
            name.full());
    assert!(name.salutation() == expected.salutation,
            "[{}] Expected salutation {:?}, got {:?}",
            input,
            expected.salutation,
            name.salutation());
    assert!(name.first() == expected.first,
            "[{}] Expected first {:?}, got {:?}",
            input,
            expected.first,
            name.first());
    assert!(name.middle() == expected.middle,
            "[{}] Expected middle {:?}, got {:?}",
            input,
            expected.middle,
            name.middle());
    assert!(name.last() == expected.last,
            "[{}] Expected last {:?}, got {:?}",
            input,
            expected.last,
            name.last());
    assert!(name.suffix() == expected.suffix,
            "[{}] Expected suffix {:?}, got {:?}",
            input,
            expected.suffix,
            name.suffix());
}

#[test]
fn parsing() {
    for expected in parseable_names() {
        let name = Name::parse(&expected.input);
        assert_parts(&name, &expected, &expected.input);
    }
}

#[test]
fn full_is_joined_parts() {
    for expected in parseable_names() {
        let name = Name::parse(&expected.input);
        let joined = [name.salutation(), name.first(), name.middle(), name.last(), name.suffix()]
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined, name.full(), "[{}]", expected.input);
    }
}

#[test]
fn reparsing_full_is_stable() {
    for expected in parseable_names() {
        let name = Name::parse(&expected.input);
        let reparsed = Name::parse(name.full());
        assert_parts(&reparsed, &expected, name.full());
    }
}

#[test]
fn lazy_accessors_agree() {
    for expected in parseable_names() {
        let name = Name::parse(&expected.input);

        // Ask in reverse dependency order, to make sure nothing relies on
        // an earlier accessor having been called first
        let parser = NameParser::new(&expected.input);
        assert_eq!(name.middle(), parser.middle(), "[{}]", expected.input);
        assert_eq!(name.first(), parser.first(), "[{}]", expected.input);
        assert_eq!(name.last(), parser.last(), "[{}]", expected.input);
        assert_eq!(name.salutation(), parser.salutation(), "[{}]", expected.input);
        assert_eq!(name.suffix(), parser.suffix(), "[{}]", expected.input);
        assert_eq!(name, parser.to_name());
    }
}

#[test]
fn normalized_form() {
    let parser = NameParser::new("Professor Johnathan R Smith, PH.D");
    assert_eq!("Prof. Johnathan R. Smith Ph.D.", parser.normalized());
}

#[test]
fn total_over_odd_input() {
    let inputs = [
        "",
        "   ",
        "\u{0}\u{1}\u{2}",
        ",,,",
        "the the the",
        ".",
        "...",
        "Dr.",
        "Jr.",
        "Sr.",
        "MD PhD",
        "鈴木 一郎",
        "Élodie Ñúñez",
        "a b c d e f g",
        "$1 $2",
    ];

    for input in inputs.iter() {
        let name = Name::parse(input);
        assert_eq!(name, Name::parse(name.full()), "[{}]", input);
    }
}

#[test]
fn long_input() {
    let input = "Ann ".repeat(10_000);
    let name = Name::parse(&input);
    assert_eq!("Ann", name.first());
    assert_eq!("Ann", name.last());
}

#[test]
fn parallel_parsing() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| Name::parse("Senator John Sidney McCain III")))
        .collect();

    for handle in handles {
        let name = handle.join().unwrap();
        assert_eq!("Sen.", name.salutation());
        assert_eq!("III", name.suffix());
    }
}
