use crate::pipeline::{Envelope, PipelineError, Transform};
use energy_client::domain::Reading;
use time::{
    macros::{datetime, format_description},
    PrimitiveDateTime,
};

/// Pure validation of a `Reading` record.
///
/// Rules:
/// - every channel value must be finite and non-negative.
/// - the timestamp must parse as `YYYY-MM-DD HH:MM:SS`.
/// - the timestamp must lie within [2000-01-01, 2100-01-01].
pub fn validate_reading(env: Envelope<Reading>) -> Result<Envelope<Reading>, PipelineError> {
    let r = &env.payload;
    let reject = |reason: String| {
        PipelineError::Transform(format!("record {}: {reason}", env.position))
    };

    for (channel, value) in r.channels.iter() {
        if !value.is_finite() || value < 0.0 {
            return Err(reject(format!("{} must be a non-negative number, got {value}", channel.name())));
        }
    }

    let layout = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let ts = PrimitiveDateTime::parse(&r.timestamp, layout)
        .map_err(|e| reject(format!("invalid timestamp '{}': {e}", r.timestamp)))?;

    let min_ts = datetime!(2000-01-01 00:00:00);
    let max_ts = datetime!(2100-01-01 00:00:00);

    if ts < min_ts || ts > max_ts {
        return Err(reject(format!("timestamp '{}' out of allowed range", r.timestamp)));
    }

    Ok(env)
}

#[derive(Clone, Default)]
pub struct ReadingValidation;

#[async_trait::async_trait]
impl Transform<Reading, Reading> for ReadingValidation {
    async fn apply(&self, input: Envelope<Reading>) -> Result<Envelope<Reading>, PipelineError> {
        match validate_reading(input) {
            Ok(env) => Ok(env),
            Err(e) => {
                metrics::counter!("validation_readings_rejected_total").increment(1);
                Err(e)
            }
        }
    }
}
