use std::process::ExitCode;

use tf_idf_classifier::{Classification, TextClassifier};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> tf_idf_classifier::Result<()> {
    let mut classifier: TextClassifier = TextClassifier::new(["Interest", "Food", "Rent"])?;
    classifier.train(
        "Interest",
        &["Credit Interest", "Interest Credited", "Realized Interest on XXXX"],
    )?;
    classifier.train("Food", &["Coffee", "StormBukcs", "DoMcnalds XXXX"])?;
    classifier.train("Rent", &["Rent payed", "House Rent XXXXXX", "payment of Rent"])?;
    classifier.finalize()?;

    for text in ["StormBukcs", "House Rent XXXXXX", "Interest XXXX", "papaya"] {
        match classifier.classify_detailed(text)? {
            Classification::Label(label) => println!("{:<20} -> {}", text, label),
            Classification::Ambiguous => println!("{:<20} -> (ambiguous)", text),
            Classification::Uncomputable => println!("{:<20} -> (no score)", text),
        }
        if let Some(scores) = classifier.scores(text)? {
            log::info!("{:#?}", scores);
        }
    }
    Ok(())
}
