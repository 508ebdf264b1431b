use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Summary { json, .. }
        | Commands::Recipients { json, .. }
        | Commands::Awards { json, .. }
        | Commands::Points { json, .. }
        | Commands::Check { json, .. } => *json,
    };
    if json { OutputMode::Json } else { OutputMode::Text }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_switches_every_command_to_json() {
        let cases: [Vec<&str>; 5] = [
            vec!["spendmap", "summary", "--json"],
            vec!["spendmap", "recipients", "--json"],
            vec!["spendmap", "awards", "--json"],
            vec!["spendmap", "points", "--state", "MD", "--json"],
            vec!["spendmap", "check", "x.csv", "--json"],
        ];
        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn text_is_the_default_mode() {
        let parsed = parse_from(["spendmap", "summary"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }
}
