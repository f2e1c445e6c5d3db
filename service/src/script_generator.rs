use domain::model::entity::JobScript;
use domain::model::vo::{ArgumentLists, Combination, ScriptRequest};
use domain::LaunchError;

const SHEBANG: &str = "#!/bin/bash";
const DIRECTIVE: &str = "#SBATCH";
const PARAMS_ARRAY: &str = "PARAMS_ARRAY";
const TASK_ID: &str = "SLURM_ARRAY_TASK_ID";

/// Render the submission script for `request`.
///
/// One combination gives a plain invocation; several give a job array whose
/// tasks pick their arguments from a shell array by task index.
pub fn generate(request: &ScriptRequest) -> Result<JobScript, LaunchError> {
    let combinations = cartesian_product(&request.arguments)?;
    let launcher = &request.launcher;
    let command = format!("{}{}", launcher.cmd_prefix, request.module);

    let mut lines = vec![SHEBANG.to_owned()];
    lines.extend(request.directives.iter().map(|(key, value)| directive(key, value)));

    if let [combination] = combinations.as_slice() {
        let params = render_params(combination);
        lines.push(String::new());
        lines.push(launcher.preamble.clone());
        lines.push(if params.is_empty() {
            command
        } else {
            format!("{command} {params}")
        });
    } else {
        lines.push(directive("array", &format!("0-{}", combinations.len() - 1)));
        lines.push(String::new());
        lines.push(format!("{PARAMS_ARRAY}=("));
        lines.extend(
            combinations.iter().map(|c| format!("    \"{}\"", escape_quoted(&render_params(c)))),
        );
        lines.push(")".to_owned());
        lines.push(String::new());
        lines.push(launcher.preamble.clone());
        lines.push(format!("{command} ${{{PARAMS_ARRAY}[${TASK_ID}]}}"));
    }

    tracing::debug!(module = %request.module, jobs = combinations.len(), "Generated script");
    Ok(JobScript::new(lines, combinations.len()))
}

/// Every way of picking one value per argument. The first argument varies
/// slowest. No arguments at all yield a single empty combination.
pub fn cartesian_product(arguments: &ArgumentLists) -> Result<Vec<Combination>, LaunchError> {
    let mut combinations = vec![Combination::new()];
    for (key, values) in arguments {
        if values.is_empty() {
            return Err(LaunchError::EmptyArgument(key.clone()));
        }
        combinations = combinations
            .into_iter()
            .flat_map(|combination| {
                values.iter().map(move |value| {
                    let mut next = combination.clone();
                    next.insert(key.clone(), value.clone());
                    next
                })
            })
            .collect();
    }
    Ok(combinations)
}

/// `--key value` pairs separated by spaces; an empty value renders as a bare `--key`.
pub fn render_params(combination: &Combination) -> String {
    combination
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                format!("--{key}")
            } else {
                format!("--{key} {value}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape the characters that stay special inside a double-quoted shell word,
/// so each array element holds exactly the rendered parameters.
fn escape_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn directive(key: &str, value: &str) -> String {
    format!("{DIRECTIVE} --{key}={value}")
}
