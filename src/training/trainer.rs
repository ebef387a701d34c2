use super::*;
use crate::frame::Frame;
use std::sync::Arc;

/// One algorithm's training capability. A fresh instance serves exactly one
/// segment: configured, validated, then trained if validation found no errors.
pub trait Trainer: Send {
    /// Take the blueprint, already pointing at this segment's frames.
    fn configure(&mut self, parms: &Blueprint, train: Arc<Frame>, valid: Option<Arc<Frame>>);
    /// Findings about the configuration. Any error blocks training.
    fn validate(&mut self) -> Vec<Message>;
    /// Fit synchronously.
    fn train(&mut self) -> anyhow::Result<Model>;
}

/// Number of blocking findings.
pub fn error_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| m.is_error()).count()
}

/// Checks shared by the built-in algorithms: the response must be a numeric
/// column of the training frame with at least `min_rows` usable rows.
pub(crate) fn check_response(
    parms: &Blueprint,
    train: Option<&Frame>,
    valid: Option<&Frame>,
    needs: &[&str],
) -> Vec<Message> {
    let mut messages = Vec::new();
    let Some(train) = train else {
        return vec![Message::error("train", "trainer was not configured")];
    };
    let min = parms.count("min_rows").unwrap_or(crate::DEFAULT_MIN_ROWS);
    let columns = std::iter::once(parms.response.as_str())
        .chain(needs.iter().copied())
        .collect::<Vec<_>>();
    for name in columns.iter() {
        match train.vec(name) {
            None => messages.push(Message::error(name, format!("column {:?} not found in {}", name, train.key()))),
            Some(c) if c.is_categorical() => messages.push(Message::error(name, format!("column {:?} must be numeric", name))),
            Some(_) => {}
        }
        if let Some(valid) = valid {
            if valid.vec(name).is_none() {
                messages.push(Message::error(name, format!("column {:?} not found in {}", name, valid.key())));
            }
        }
    }
    if messages.is_empty() {
        let usable = (0..train.nrows())
            .filter(|r| columns.iter().all(|c| train.vec(c).is_some_and(|c| !c.is_na(*r))))
            .count();
        if usable < min {
            messages.push(Message::error(
                "min_rows",
                format!("segment has {} usable rows, at least {} required", usable, min),
            ));
        }
    }
    if valid.is_some_and(|v| v.nrows() == 0) {
        messages.push(Message::warn("valid", "validation partition is empty"));
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;

    fn frame(ys: Vec<f64>) -> Frame {
        let xs = (0..ys.len()).map(|i| i as f64).collect();
        Frame::new(
            "t",
            vec![
                Column::labels("c", &vec![Some("a"); ys.len()]),
                Column::real("x", xs),
                Column::real("y", ys),
            ],
        )
    }

    #[test]
    fn unconfigured() {
        let parms = Blueprint::new("mean", "t", "y");
        assert_eq!(error_count(&check_response(&parms, None, None, &[])), 1);
    }

    #[test]
    fn response_problems() {
        let train = frame(vec![1.0, 2.0]);
        let missing = Blueprint::new("mean", "t", "nope");
        let categorical = Blueprint::new("mean", "t", "c");
        assert_eq!(error_count(&check_response(&missing, Some(&train), None, &[])), 1);
        assert_eq!(error_count(&check_response(&categorical, Some(&train), None, &[])), 1);
    }

    #[test]
    fn too_few_rows() {
        let train = frame(vec![1.0, f64::NAN]);
        let parms = Blueprint::new("mean", "t", "y").with("min_rows", 2);
        let messages = check_response(&parms, Some(&train), None, &["x"]);
        assert_eq!(error_count(&messages), 1);
        assert_eq!(messages[0].field, "min_rows");
        assert!(check_response(&parms.with("min_rows", 1), Some(&train), None, &["x"]).is_empty());
    }

    #[test]
    fn empty_validation_warns() {
        let train = frame(vec![1.0]);
        let valid = frame(vec![]);
        let parms = Blueprint::new("mean", "t", "y");
        let messages = check_response(&parms, Some(&train), Some(&valid), &[]);
        assert_eq!(error_count(&messages), 0);
        assert_eq!(messages.len(), 1);
    }
}
