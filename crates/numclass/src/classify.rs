use crate::facts::FactsOptions;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use numclass_core::classify::{classify, parse_number, Classification, Property};
use numclass_core::fact::armstrong_fact;

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifyOptions {
    /// Integer to classify (e.g., "371", "-28", "1_000")
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    /// Output the same JSON body the HTTP endpoint returns
    #[arg(long)]
    pub json: bool,

    /// Do not contact the trivia provider
    #[arg(long)]
    pub offline: bool,

    #[clap(flatten)]
    pub facts: FactsOptions,
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let number =
        parse_number(Some(options.number.as_str())).map_err(|source| Error::InvalidNumber {
            raw: Some(options.number.clone()),
            source,
        })?;

    let fun_fact = if options.offline {
        armstrong_fact(number).unwrap_or_default()
    } else {
        let outcome = options.facts.client()?.resolve(number).await;
        if global.debug && outcome.is_unavailable() {
            eprintln!("{}", "Fun fact unavailable from provider".yellow());
        }
        outcome.into_text()
    };

    let classification = classify(number, fun_fact);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        display_classification(&classification);
    }

    Ok(())
}

fn yes_no(value: bool) -> String {
    if value {
        "yes".green().to_string()
    } else {
        "no".bright_black().to_string()
    }
}

fn property_label(property: Property) -> String {
    match property {
        Property::Armstrong => "armstrong".bright_magenta().to_string(),
        Property::Odd => "odd".bright_blue().to_string(),
        Property::Even => "even".bright_blue().to_string(),
    }
}

fn display_classification(classification: &Classification) {
    println!("\n{}\n", classification.number.to_string().bold().cyan());

    let mut table = prettytable::Table::new();
    table.set_format(
        prettytable::format::FormatBuilder::new()
            .padding(1, 1)
            .build(),
    );
    table.add_row(prettytable::row![
        "Prime".bold().cyan(),
        yes_no(classification.is_prime)
    ]);
    table.add_row(prettytable::row![
        "Perfect".bold().cyan(),
        yes_no(classification.is_perfect)
    ]);
    table.add_row(prettytable::row![
        "Properties".bold().cyan(),
        classification
            .properties
            .iter()
            .map(|p| property_label(*p))
            .collect::<Vec<_>>()
            .join(", ")
    ]);
    table.add_row(prettytable::row![
        "Digit sum".bold().cyan(),
        classification.digit_sum
    ]);
    table.printstd();

    if !classification.fun_fact.is_empty() {
        println!("\n{}", classification.fun_fact.bright_white());
    }
}
