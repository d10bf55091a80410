use super::test_support::parse_test_args;
use super::*;
use std::time::Duration;

#[test]
fn parse_args_defaults() -> Result<(), String> {
    let args = parse_test_args(["phaseload"])?;

    let checks = [
        (args.host == "0.0.0.0", "Unexpected host"),
        (args.port == 9999, "Unexpected port"),
        (args.protocol == Protocol::Http, "Expected Protocol::Http"),
        (args.template.is_none(), "Expected template to be None"),
        (args.concurrency.get() == 1, "Unexpected concurrency"),
        (args.invocations == 10, "Unexpected invocations"),
        (args.warmup == 0, "Unexpected warmup"),
        (args.delay_us == 0, "Unexpected delay"),
        (args.log_file.is_none(), "Expected log_file to be None"),
        (!args.verbose, "Expected verbose to be false"),
        (!args.multi_client, "Expected multi_client to be false"),
        (args.harness == HarnessKind::None, "Expected HarnessKind::None"),
        (!args.m5ops, "Expected m5ops to be false"),
        (args.harness_interval == 0, "Unexpected harness_interval"),
        (
            args.request_timeout == Duration::from_secs(10),
            "Unexpected request_timeout",
        ),
        (args.pool_size == 20, "Unexpected pool_size"),
        (args.seed.is_none(), "Expected seed to be None"),
        (!args.strict_status, "Expected strict_status to be false"),
        (
            args.output_format == OutputFormat::Text,
            "Expected OutputFormat::Text",
        ),
        (args.config.is_none(), "Expected config to be None"),
    ];

    for (ok, msg) in checks {
        if !ok {
            return Err(msg.to_owned());
        }
    }

    Ok(())
}

#[test]
fn parse_args_short_flags() -> Result<(), String> {
    let args = parse_test_args([
        "phaseload",
        "-u",
        "10.0.0.2",
        "-p",
        "8080",
        "-f",
        "jobs.tmpl",
        "-c",
        "4",
        "-n",
        "400",
        "-w",
        "40",
        "-v",
    ])?;

    if args.host != "10.0.0.2" || args.port != 8080 {
        return Err(format!("Unexpected endpoint {}:{}", args.host, args.port));
    }
    if args.template.as_deref() != Some("jobs.tmpl") {
        return Err("Unexpected template".to_owned());
    }
    if args.concurrency.get() != 4 || args.invocations != 400 || args.warmup != 40 {
        return Err("Unexpected counts".to_owned());
    }
    if !args.verbose {
        return Err("Expected verbose".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_harness_aliases() -> Result<(), String> {
    let args = parse_test_args(["phaseload", "--m5ops", "--m5iv", "25"])?;
    if !args.m5ops {
        return Err("Expected m5ops".to_owned());
    }
    if args.harness_interval != 25 {
        return Err(format!("Unexpected interval {}", args.harness_interval));
    }

    let args = parse_test_args(["phaseload", "--harness", "LOG"])?;
    if args.harness != HarnessKind::Log {
        return Err("Expected HarnessKind::Log".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_timeout_units() -> Result<(), String> {
    let args = parse_test_args(["phaseload", "--timeout", "250ms"])?;
    if args.request_timeout != Duration::from_millis(250) {
        return Err(format!("Unexpected timeout {:?}", args.request_timeout));
    }
    let args = parse_test_args(["phaseload", "--timeout", "2m"])?;
    if args.request_timeout != Duration::from_secs(120) {
        return Err(format!("Unexpected timeout {:?}", args.request_timeout));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_concurrency() -> Result<(), String> {
    if parse_test_args(["phaseload", "-c", "0"]).is_ok() {
        return Err("Expected zero concurrency to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_pool_size() -> Result<(), String> {
    if parse_test_args(["phaseload", "--pool-size", "0"]).is_ok() {
        return Err("Expected zero pool size to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_rejects_bad_timeout() -> Result<(), String> {
    for value in ["", "abc", "10parsecs", "0s"] {
        if parse_test_args(["phaseload", "--timeout", value]).is_ok() {
            return Err(format!("Expected timeout '{}' to be rejected", value));
        }
    }
    Ok(())
}
