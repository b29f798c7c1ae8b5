use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct SalutationData {
    salutations: HashMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct SuffixData {
    lineage_suffixes: Vec<String>,
    credential_suffixes: Vec<String>,
}

#[derive(Deserialize)]
struct ParticleData {
    compound_particles: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/salutation_data.json")?;
    let salutations: SalutationData = serde_json::from_str(&json)?;
    write_map(
        &output.join("salutations.rs"),
        &salutations.salutations,
        |vs| {
            let lowercased: Vec<String> = vs.iter().map(|v| v.to_lowercase()).collect();
            format!("&[{}] as &[_]", quoted_comma_separated(&lowercased))
        },
    )?;

    let json = read_file(&input, "build/suffix_data.json")?;
    let suffixes: SuffixData = serde_json::from_str(&json)?;
    let mut seen = HashSet::new();
    let lineage = dedup_terms(&suffixes.lineage_suffixes, &mut seen);
    let credentials = dedup_terms(&suffixes.credential_suffixes, &mut seen);
    write_slice(&output.join("lineage_suffixes.rs"), &lineage)?;
    write_slice(&output.join("credential_suffixes.rs"), &credentials)?;
    let all_suffixes: Vec<String> = lineage.iter().chain(credentials.iter()).cloned().collect();
    write_set(&output.join("suffixes.rs"), &all_suffixes)?;

    let json = read_file(&input, "build/particle_data.json")?;
    let particles: ParticleData = serde_json::from_str(&json)?;
    // Longest first, so "De La" is tried before "De" or "La"
    let mut compound_particles = dedup_terms(&particles.compound_particles, &mut HashSet::new());
    compound_particles.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    write_slice(&output.join("compound_particles.rs"), &compound_particles)?;

    Ok(())
}

// Two terms that differ only in case or in surrounding periods match the
// same input, so only the first one listed is kept
fn dedup_terms(terms: &[String], seen: &mut HashSet<String>) -> Vec<String> {
    terms
        .iter()
        .filter(|t| !t.trim_matches('.').is_empty())
        .filter(|t| seen.insert(t.trim_matches('.').to_lowercase()))
        .cloned()
        .collect()
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v);
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_slice(output: &Path, values: &[String]) -> Result<()> {
    fs::write(output, format!("&[{}]", quoted_comma_separated(values)))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}

fn quoted_comma_separated(vs: &[String]) -> String {
    vs.iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
