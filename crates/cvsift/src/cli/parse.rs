use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use cvsift_core::{ResumePipeline, ResumeProfile};

pub fn run(files: &[String], json: bool, output: Option<&str>) -> Result<()> {
    if files.is_empty() {
        bail!("no input files");
    }

    let pipeline = ResumePipeline::new();
    let mut profiles = Vec::new();

    for file in files {
        let path = Path::new(file);
        if !path.is_file() {
            bail!("file not found: {}", path.display());
        }
        let profile = pipeline
            .parse_file(path)
            .with_context(|| format!("could not parse this document: {}", path.display()))?;

        if !json {
            print_summary(file, &profile);
        }
        profiles.push(profile);
    }

    if json || output.is_some() {
        // One record stays a bare object; several become one JSON array,
        // on stdout and in the output file alike.
        let body = if profiles.len() == 1 {
            serde_json::to_string_pretty(&profiles[0])?
        } else {
            serde_json::to_string_pretty(&profiles)?
        };
        if json {
            println!("{body}");
        }
        if let Some(out) = output {
            fs::write(out, &body).with_context(|| format!("could not write {out}"))?;
            eprintln!("Wrote: {out}");
        }
    }

    Ok(())
}

fn print_summary(file: &str, profile: &ResumeProfile) {
    println!("{file}");
    println!("  Name: {}", or_not_found(&profile.name.join(", ")));
    println!(
        "  Email: {}",
        profile.email.as_deref().unwrap_or("Not found")
    );
    println!(
        "  Phone: {}",
        profile.phone.as_deref().unwrap_or("Not found")
    );
    println!("  Skills: {}", or_not_found(&profile.skills.join(", ")));
    println!(
        "  Education: {}",
        or_not_found(&profile.education.join(", "))
    );
    match profile.experience_years {
        Some(years) => println!("  Experience: {years} years"),
        None => println!("  Experience: Not found"),
    }
    println!(
        "  Job titles: {}",
        or_not_found(&profile.job_titles.join(", "))
    );
}

fn or_not_found(joined: &str) -> &str {
    if joined.is_empty() {
        "Not found"
    } else {
        joined
    }
}
