use std::sync::OnceLock;

use regex::Regex;

// Matches `{{ env.VAR }}` with an optional `| default("fallback")` tail.
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw config text before it is
/// handed to the TOML parser.
///
/// A placeholder may carry a fallback, `{{ env.VAR | default("x") }}`,
/// used when the variable is unset. Comment lines are left untouched so
/// commented-out placeholders do not have to resolve.
pub fn expand_placeholders(input: &str) -> anyhow::Result<String> {
    let mut expanded = String::with_capacity(input.len());

    for (index, line) in input.lines().enumerate() {
        if index > 0 {
            expanded.push('\n');
        }
        if line.trim_start().starts_with('#') {
            expanded.push_str(line);
            continue;
        }
        expanded.push_str(&expand_line(line)?);
    }

    if input.ends_with('\n') {
        expanded.push('\n');
    }

    Ok(expanded)
}

fn expand_line(line: &str) -> anyhow::Result<String> {
    let mut out = String::with_capacity(line.len());
    let mut tail = 0;

    for captures in placeholder_re().captures_iter(line) {
        let whole = captures.get(0).expect("capture 0 is the whole match");
        let fallback = captures.get(2).map(|m| m.as_str());

        out.push_str(&line[tail..whole.start()]);
        out.push_str(&lookup(&captures[1], fallback)?);
        tail = whole.end();
    }

    out.push_str(&line[tail..]);
    Ok(out)
}

fn lookup(key: &str, fallback: Option<&str>) -> anyhow::Result<String> {
    let name = match key.strip_prefix("env.") {
        Some(name) if !name.contains('.') => name,
        _ => anyhow::bail!("unsupported placeholder scope `{key}`: only `env.` variables can be expanded"),
    };

    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(_) => fallback.map_or_else(
            || Err(anyhow::anyhow!("environment variable `{name}` is not set")),
            |fallback| Ok(fallback.to_string()),
        ),
    }
}
