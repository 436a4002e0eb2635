//! User-facing rendering of prediction results and errors

use imagecheck_core::{Error, Prediction};

/// Render a prediction list as aligned label/score rows.
///
/// An empty list renders nothing; the caller reports the
/// no-meaningful-prediction notice instead of a bare header.
pub fn render_predictions(predictions: &[Prediction]) -> String {
    if predictions.is_empty() {
        return String::new();
    }

    let width = predictions
        .iter()
        .map(|p| p.label.len())
        .max()
        .unwrap_or(0)
        .max("label".len());

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  score\n", "label"));
    for p in predictions {
        out.push_str(&format!("{:<width$}  {:.4}\n", p.label, p.score));
    }
    out
}

/// Verdict line for the gender tool
pub fn gender_verdict(top: &Prediction) -> String {
    format!("Predicted gender: {} (score {:.2})", top.label, top.score)
}

/// Verdict line for the detector tool
pub fn detector_verdict(top: &Prediction) -> String {
    format!("The image is likely {} (score {:.2})", top.label, top.score)
}

/// Verdict line for the artificial-image policy
pub fn artificial_verdict(flagged: bool) -> &'static str {
    if flagged {
        "Warning: the image may be artificially generated."
    } else {
        "The image is likely human."
    }
}

/// Map an error onto the message shown to the user.
///
/// Each taxonomy variant keeps its own message; ModelLoading carries the
/// retry hint since the cold-started endpoint usually recovers in seconds.
pub fn user_message(error: &Error) -> String {
    match error {
        Error::MissingCredential => format!(
            "No API token configured. Set {} (or put it in a .env file) and try again.",
            imagecheck_client::TOKEN_ENV_VAR
        ),
        Error::Timeout => {
            "The inference endpoint did not respond in time. Try again later.".to_string()
        }
        Error::ModelLoading => {
            "The model is still loading on the endpoint. Retry in a few seconds.".to_string()
        }
        Error::Http { status, body } => {
            format!("The endpoint returned HTTP {status}: {body}")
        }
        Error::ParseFailure(detail) => {
            format!("The endpoint returned an unexpected response: {detail}")
        }
        Error::EmptyResult => {
            "No meaningful prediction. Try again with another image.".to_string()
        }
        Error::Image(detail) => format!("Could not read the image: {detail}"),
        Error::Config(detail) => format!("Configuration problem: {detail}"),
        Error::Io(detail) => format!("I/O error: {detail}"),
    }
}
