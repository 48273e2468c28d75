//! Console front end for the intent model.
//!
//! Reads one command per line from stdin, prints the token ids and the
//! decision, and forwards the decision to an actuator. Pass
//! `--model <export.json>` to run a JSON model export instead of the bundled one.

use std::env;
use std::io::{self, BufRead, Write};

use intent_inference::dimensions::{MAX_INPUT_LEN, PAD_TOKEN};
use intent_inference::{Intent, IntentModel};
use log::{debug, error, info};

const LED_PIN: u8 = 21;

/// Side effect driven by a decision.
trait Actuator {
    fn apply(&mut self, intent: Intent);
}

/// Stand-in for a GPIO-driven LED; logs every level change.
struct LoggingLed {
    pin: u8,
    level: bool,
}

impl LoggingLed {
    fn new(pin: u8) -> Self {
        Self { pin, level: false }
    }
}

impl Actuator for LoggingLed {
    fn apply(&mut self, intent: Intent) {
        let level = intent == Intent::On;
        if level != self.level {
            info!(
                "GPIO {} -> {} (LED {})",
                self.pin,
                if level { "HIGH" } else { "LOW" },
                intent
            );
        }
        self.level = level;
    }
}

fn load_model() -> Result<IntentModel, String> {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => Ok(IntentModel::builtin()),
        3 if args[1] == "--model" => {
            IntentModel::from_json_file(&args[2]).map_err(|e| e.to_string())
        }
        _ => Err(format!("Usage: {} [--model <export.json>]", args[0])),
    }
}

/// Classifies every line of `input`, writing a report per line to `out`.
///
/// Stops at the first read or write error.
fn run<R, W, A>(model: &IntentModel, input: R, out: &mut W, actuator: &mut A) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    A: Actuator,
{
    writeln!(out, "GRU intent inference ready!")?;
    writeln!(out, "Type a command like: turn on led")?;
    writeln!(out)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.len() >= MAX_INPUT_LEN {
            debug!("Input longer than {} bytes, truncating", MAX_INPUT_LEN - 1);
        }

        let tokens = model.tokenize(&line);
        let recognized: Vec<&str> = tokens
            .iter()
            .filter(|&&token| token != PAD_TOKEN)
            .filter_map(|&token| model.vocabulary().word(token))
            .collect();
        debug!("Recognized words: {:?}", recognized);

        let tokenized: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        writeln!(out, "Tokenized: {}", tokenized.join(" "))?;

        let prediction = model.classify(&model.forward_hidden(&model.embed(&tokens)));
        let intent = prediction.intent();
        let label = match model.label(prediction.class_index) {
            Some(label) => label.to_string(),
            None => intent.to_string(),
        };
        writeln!(
            out,
            "Intent: LED {} ({:.1}%)",
            label,
            prediction.confidence() * 100.0
        )?;
        writeln!(out, "-----------------------------")?;
        out.flush()?;

        actuator.apply(intent);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let model = match load_model() {
        Ok(model) => model,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut led = LoggingLed::new(LED_PIN);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&model, io::stdin().lock(), &mut out, &mut led) {
        error!("Console session failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingActuator {
        applied: Vec<Intent>,
    }

    impl Actuator for RecordingActuator {
        fn apply(&mut self, intent: Intent) {
            self.applied.push(intent);
        }
    }

    /// Accepts `capacity` bytes, then fails like a closed pipe.
    struct FailingWriter {
        capacity: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.capacity {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            self.capacity -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reports_every_line() {
        let model = IntentModel::builtin();
        let mut out = Vec::new();
        let mut actuator = RecordingActuator::default();

        run(
            &model,
            "turn on led\nturn off led\n".as_bytes(),
            &mut out,
            &mut actuator,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tokenized: 1 2 4 0 0 0"));
        assert!(text.contains("Intent: LED ON"));
        assert!(text.contains("Intent: LED OFF"));
        assert_eq!(actuator.applied, vec![Intent::On, Intent::Off]);
    }

    #[test]
    fn test_write_error_stops_the_session() {
        let model = IntentModel::builtin();
        let mut out = FailingWriter { capacity: 0 };
        let mut actuator = RecordingActuator::default();

        let result = run(
            &model,
            "turn on led\nturn off led\n".as_bytes(),
            &mut out,
            &mut actuator,
        );

        assert!(matches!(result, Err(e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(actuator.applied.is_empty());
    }

    #[test]
    fn test_write_error_mid_session_skips_remaining_lines() {
        let model = IntentModel::builtin();
        let mut actuator = RecordingActuator::default();

        // Room for the banner only; the first report line fails.
        let banner = "GRU intent inference ready!\nType a command like: turn on led\n\n";
        let mut out = FailingWriter {
            capacity: banner.len(),
        };

        let result = run(
            &model,
            "turn on led\nturn off led\n".as_bytes(),
            &mut out,
            &mut actuator,
        );

        assert!(matches!(result, Err(e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(actuator.applied.is_empty());
    }
}
