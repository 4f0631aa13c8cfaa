//! Demo commands and presets registered by the host.

use devcon_console::{Console, LogSink};
use devcon_types::error::{ConsoleError, Result};

/// Register the demo command set. Handlers write their output through a
/// [`LogSink`] clone since they cannot borrow the console they run in.
pub fn register_demo_commands(console: &mut Console) -> Result<()> {
    let sink = console.sink();
    console.register_fn("/echo", move |args| {
        sink.log(&args[1..].join(" "));
        Ok(())
    })?;

    let sink = console.sink();
    console.register_fn("/parse", move |args| parse_json(&sink, args))?;

    let sink = console.sink();
    console.register_fn("/sum", move |args| {
        let total = sum(&args[1..])?;
        sink.log(&format!("{total}"));
        Ok(())
    })?;

    let sink = console.sink();
    console.register_fn("/clear", move |_| {
        sink.clear();
        Ok(())
    })?;

    console.register_fn("/warn", |args| {
        log::warn!("{}", args[1..].join(" "));
        Ok(())
    })?;

    console.register_fn("/fail", |args| {
        let reason = args.get(1).copied().unwrap_or("requested failure");
        Err(ConsoleError::Handler(reason.to_string()))
    })?;

    log::info!("registered {} demo commands", console.command_prefixes().len());
    Ok(())
}

/// Pretty-print each brace literal argument as JSON.
fn parse_json(sink: &LogSink, args: &[&str]) -> Result<()> {
    if args.len() < 2 {
        return Err(ConsoleError::InvalidArgument(
            "usage: /parse {json} ...".to_string(),
        ));
    }
    for raw in &args[1..] {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        for line in serde_json::to_string_pretty(&value)?.lines() {
            sink.log(line);
        }
    }
    Ok(())
}

fn sum(args: &[&str]) -> Result<f64> {
    args.iter().try_fold(0.0, |acc, arg| {
        arg.parse::<f64>()
            .map(|v| acc + v)
            .map_err(|_| ConsoleError::InvalidArgument(format!("not a number: {arg}")))
    })
}

pub fn register_demo_presets(console: &mut Console) -> Result<()> {
    console.add_preset(
        "/echo \"hello from a preset\"",
        "Hello",
        Some("Echo a greeting"),
        None,
        true,
    )?;
    console.add_preset(
        "/parse {\"player\": {\"hp\": 100, \"pos\": [0, 0]}}",
        "Player JSON",
        Some("Parse a nested JSON literal"),
        Some("Data"),
        true,
    )?;
    console.add_preset(
        "/sum 1 2 3",
        "Sum",
        Some("Fills the input line; edit before submitting"),
        Some("Data"),
        false,
    )?;
    console.add_preset("/warn low memory", "Warn", None, Some("Diagnostics"), true)?;
    console.add_preset(
        "/fail \"something broke\"",
        "Fail",
        Some("Handler error shown as an exception"),
        Some("Diagnostics"),
        true,
    )?;
    console.add_preset("/clear", "Clear log", None, None, true)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devcon_types::severity::Severity;

    fn demo() -> Console {
        let mut console = Console::default();
        register_demo_commands(&mut console).unwrap();
        register_demo_presets(&mut console).unwrap();
        console
    }

    fn texts(console: &Console) -> Vec<String> {
        console.log_lines().into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn echo_joins_arguments() {
        let mut c = demo();
        assert!(c.execute("/echo \"a b\" c"));
        assert_eq!(texts(&c), ["a b c"]);
    }

    #[test]
    fn parse_pretty_prints_brace_literal() {
        let mut c = demo();
        assert!(c.execute("/parse {\"k\": [1]}"));
        assert_eq!(texts(&c), ["{", "  \"k\": [", "    1", "  ]", "}"]);
    }

    #[test]
    fn parse_reports_bad_json_as_exception() {
        let mut c = demo();
        assert!(c.execute("/parse {nope}"));
        assert_eq!(c.log_counts().exception, 1);
    }

    #[test]
    fn sum_and_bad_number() {
        let mut c = demo();
        c.execute("/sum 1 2.5");
        assert_eq!(texts(&c), ["3.5"]);
        c.execute("/sum 1 x");
        let last = c.log_lines().pop().unwrap();
        assert_eq!(last.severity, Severity::Exception);
        assert_eq!(last.text, "Exception: invalid argument: not a number: x");
    }

    #[test]
    fn clear_empties_log() {
        let mut c = demo();
        c.execute("/echo hi");
        c.execute("/clear");
        assert!(c.log_lines().is_empty());
    }

    #[test]
    fn presets_are_grouped() {
        let c = demo();
        assert_eq!(
            c.preset_names(),
            ["Hello", "Clear log", "Player JSON", "Sum", "Warn", "Fail"]
        );
    }

    #[test]
    fn fail_preset_runs_immediately() {
        let mut c = demo();
        let index = c.preset_names().iter().position(|n| n == "Fail").unwrap();
        c.activate_preset(index);
        assert_eq!(texts(&c), ["Exception: something broke"]);
    }
}
