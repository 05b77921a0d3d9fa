use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use fixed_map::Set;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use verba::{Infinitive, Participle, Paradigm, Persons, PrincipalParts, Tense, Verb, Voice};

/// Marker for an absent principal part or form.
const ABSENT: &str = "-";

#[derive(Parser)]
struct Args {
    /// Principal parts in citation order: present first singular, present
    /// infinitive, perfect first singular and perfect passive participle.
    /// Use `-` for a part which is absent.
    #[arg(name = "parts", num_args = 0..=4)]
    parts: Vec<String>,
    /// Only show the given tense. Can be specified multiple times.
    #[arg(long = "tense", name = "tense")]
    tenses: Vec<String>,
    /// List available `--tense` arguments and exit.
    #[arg(long)]
    list_tenses: bool,
    /// Print the paradigm as JSON.
    #[arg(long)]
    json: bool,
    /// Fail instead of printing absent forms when the perfect or participle
    /// is missing.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    if args.list_tenses {
        println!("Available `--tense` arguments:");

        for tense in Tense::ALL {
            println!("{tense}");
        }

        return Ok(());
    }

    if args.parts.is_empty() {
        bail!("Missing principal parts, expected for example `amo amare amavi amatus`");
    }

    let parts = PrincipalParts::new(
        args.parts
            .iter()
            .map(|part| (part != ABSENT).then_some(part.as_str())),
    );

    let verb = Verb::new(parts.clone()).with_context(|| anyhow!("Conjugating `{parts}`"))?;

    if args.strict {
        verb.perfect_stem().with_context(|| anyhow!("Conjugating `{parts}`"))?;
        verb.participial_stem().with_context(|| anyhow!("Conjugating `{parts}`"))?;
    }

    let paradigm = if args.tenses.is_empty() {
        verb.paradigm()
    } else {
        let mut tenses = Set::new();

        for tense in &args.tenses {
            let tense = Tense::parse_keyword(tense)
                .with_context(|| anyhow!("Invalid tense `{tense}`"))?;
            tenses.insert(tense);
        }

        verb.paradigm_of(&tenses)
    };

    let mut out = std::io::stdout().lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &paradigm)?;
        writeln!(out)?;
    } else {
        print(&mut out, &paradigm)?;
    }

    Ok(())
}

fn print<O>(o: &mut O, paradigm: &Paradigm) -> Result<()>
where
    O: ?Sized + Write,
{
    writeln!(o, "{} (conjugation {})", paradigm.parts, paradigm.conjugation)?;

    for finite in &paradigm.finite {
        writeln!(o, "  {} {} {}:", finite.tense, finite.mood, finite.voice)?;
        writeln!(o, "    {}", persons(&finite.forms))?;
    }

    for &voice in Voice::ALL {
        if let Some(imperative) = paradigm.imperative.get(voice) {
            writeln!(o, "  imperative {voice}:")?;

            match imperative {
                verba::Imperative::Forms([singular, plural]) => {
                    writeln!(o, "    {singular}, {plural}")?;
                }
                verba::Imperative::Unattested(text) => {
                    writeln!(o, "    ({text})")?;
                }
            }
        }
    }

    writeln!(o, "  infinitives:")?;

    for (infinitive, value) in paradigm.infinitives.iter() {
        writeln!(o, "    {}: {}", describe_infinitive(infinitive), value.unwrap_or(ABSENT))?;
    }

    writeln!(o, "  participles:")?;

    for (participle, value) in paradigm.participles.iter() {
        writeln!(o, "    {}: {}", describe_participle(participle), value.unwrap_or(ABSENT))?;
    }

    Ok(())
}

fn persons(forms: &Persons) -> String {
    forms
        .iter()
        .map(|form| form.unwrap_or(ABSENT))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_infinitive(infinitive: Infinitive) -> &'static str {
    match infinitive {
        Infinitive::PresentActive => "present active",
        Infinitive::PresentPassive => "present passive",
        Infinitive::PerfectActive => "perfect active",
        Infinitive::PerfectPassive => "perfect passive",
        Infinitive::FutureActive => "future active",
        Infinitive::FuturePassive => "future passive",
    }
}

fn describe_participle(participle: Participle) -> &'static str {
    match participle {
        Participle::PresentActive => "present active",
        Participle::PerfectPassive => "perfect passive",
        Participle::FutureActive => "future active",
        Participle::FuturePassive => "gerundive",
    }
}
