//! Line-oriented command runner over a single in-memory session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use todo_cards_core::{AddOutcome, Card, RawTaskInput, TodoController};
use tracing::debug;

/// One parsed batch command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BatchCommand {
    Add {
        title: String,
        description: String,
        priority: bool,
    },
    Delete {
        title: String,
    },
    Sort,
    ShowPriority,
    Back,
    List {
        json: bool,
    },
}

impl BatchCommand {
    /// `Ok(None)` for blank lines and `#` comments.
    fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let words = shell_words::split(trimmed).context("unbalanced quotes")?;
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.as_str() {
            "add" => Self::parse_add(args)?,
            "delete" => match args {
                [title] => Self::Delete { title: title.clone() },
                _ => bail!("usage: delete <title>"),
            },
            "sort" => Self::no_args(args, Self::Sort, "sort")?,
            "show-priority" => Self::no_args(args, Self::ShowPriority, "show-priority")?,
            "back" => Self::no_args(args, Self::Back, "back")?,
            "list" => match args {
                [] => Self::List { json: false },
                [flag] if flag == "--json" => Self::List { json: true },
                _ => bail!("usage: list [--json]"),
            },
            other => bail!("unknown command: {other}"),
        };
        Ok(Some(command))
    }

    /// The priority flag may appear anywhere before `--`; everything after
    /// `--` is positional.
    fn parse_add(args: &[String]) -> Result<Self> {
        let mut priority = false;
        let mut flags_done = false;
        let mut positional = Vec::with_capacity(2);
        for arg in args {
            match arg.as_str() {
                "--" if !flags_done => flags_done = true,
                "--priority" | "-p" if !flags_done => priority = true,
                _ => positional.push(arg.clone()),
            }
        }

        let [title, description]: [String; 2] = positional
            .try_into()
            .map_err(|_| anyhow!("usage: add [--priority|-p] [--] <title> <description>"))?;
        Ok(Self::Add {
            title,
            description,
            priority,
        })
    }

    fn no_args(args: &[String], command: Self, name: &str) -> Result<Self> {
        if args.is_empty() {
            Ok(command)
        } else {
            bail!("{name} takes no arguments")
        }
    }
}

/// Apply every command read from `input`, reporting results to `out`.
///
/// Rejected input is reported and processing continues; malformed lines abort
/// with the offending line number.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    let mut controller = TodoController::new();

    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("failed to read line {number}"))?;
        let Some(command) = BatchCommand::parse(&line).with_context(|| format!("line {number}"))? else {
            continue;
        };
        debug!(line = number, ?command, "applying batch command");
        apply(&mut controller, command, out).with_context(|| format!("line {number}"))?;
    }

    Ok(())
}

fn apply<W: Write>(controller: &mut TodoController, command: BatchCommand, out: &mut W) -> Result<()> {
    match command {
        BatchCommand::Add {
            title,
            description,
            priority,
        } => match controller.add(&RawTaskInput::new(title, description, priority)) {
            AddOutcome::Added(card) => {
                let title = controller.board().removal_key(card).unwrap_or_default();
                writeln!(out, "added: {title}")?;
            }
            AddOutcome::Rejected(errors) => {
                let reasons: Vec<String> = errors.iter().map(|reason| reason.to_string()).collect();
                writeln!(out, "rejected: {}", reasons.join(", "))?;
            }
            AddOutcome::Unavailable => writeln!(out, "unavailable: input is hidden in priority-only mode")?,
        },
        BatchCommand::Delete { title } => {
            let deleted = controller
                .visible_card_for(&title)
                .is_some_and(|card| controller.delete(card));
            if deleted {
                writeln!(out, "deleted: {title}")?;
            } else {
                writeln!(out, "not shown: {title}")?;
            }
        }
        BatchCommand::Sort => {
            if controller.sort() {
                writeln!(out, "sorted")?;
            } else {
                writeln!(out, "unavailable: sorting is hidden in priority-only mode")?;
            }
        }
        BatchCommand::ShowPriority => {
            controller.show_high_priority();
            writeln!(out, "mode: {}", controller.mode().as_str())?;
        }
        BatchCommand::Back => {
            controller.back();
            writeln!(out, "mode: {}", controller.mode().as_str())?;
        }
        BatchCommand::List { json } => list(controller, json, out)?,
    }
    Ok(())
}

fn list<W: Write>(controller: &TodoController, json: bool, out: &mut W) -> Result<()> {
    let cards: Vec<&Card> = controller.board().visible_cards().collect();
    if json {
        serde_json::to_writer_pretty(&mut *out, &cards).context("failed to encode cards")?;
        writeln!(out)?;
        return Ok(());
    }

    for card in cards {
        let marker = if card.is_highlighted() { '!' } else { '-' };
        writeln!(out, "{marker} {}", card.title())?;
        for line in card.description().lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn run_script(script: &str) -> Result<String> {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        assert_eq!(BatchCommand::parse("   ").unwrap(), None);
        assert_eq!(BatchCommand::parse("  # note").unwrap(), None);
    }

    #[test]
    fn parse_add_with_quoting_and_flag_anywhere() {
        let command = BatchCommand::parse(r#"add -p "Call mom" 'weekly check-in'"#).unwrap();
        assert_eq!(
            command,
            Some(BatchCommand::Add {
                title: "Call mom".to_owned(),
                description: "weekly check-in".to_owned(),
                priority: true,
            })
        );
    }

    #[test]
    fn parse_add_treats_words_after_double_dash_as_fields() {
        let command = BatchCommand::parse("add -p -- -p --priority").unwrap();
        assert_eq!(
            command,
            Some(BatchCommand::Add {
                title: "-p".to_owned(),
                description: "--priority".to_owned(),
                priority: true,
            })
        );

        let command = BatchCommand::parse("add -- --priority -- ").unwrap();
        assert_eq!(
            command,
            Some(BatchCommand::Add {
                title: "--priority".to_owned(),
                description: "--".to_owned(),
                priority: false,
            })
        );
    }

    #[test]
    fn flag_like_title_can_be_added_and_deleted() {
        let output = run_script("add -- -p 'looks like a flag'
list
delete -p
list
").unwrap();
        assert_eq!(output, "added: -p
- -p
    looks like a flag
deleted: -p
");
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(BatchCommand::parse("add only-title").is_err());
        assert!(BatchCommand::parse("add \"unterminated").is_err());
        assert!(BatchCommand::parse("sort now").is_err());
        assert!(BatchCommand::parse("frobnicate").is_err());
        assert!(BatchCommand::parse("list --yaml").is_err());
    }

    #[test]
    fn grocery_session() {
        let output = run_script(
            r#"
# two tasks, one duplicate
add "Buy milk" "2% milk"
add "Call mom" "weekly check-in" --priority
add "Buy milk" dup
sort
show-priority
list
delete "Call mom"
back
list
"#,
        )
        .unwrap();

        let expected = "\
added: Buy milk
added: Call mom
rejected: title already exists
sorted
mode: priority-only
! Call mom
    weekly check-in
deleted: Call mom
mode: normal
- Buy milk
    2% milk
";
        assert_eq!(output, expected);
    }

    #[test]
    fn rejected_add_lists_every_indicator() {
        let output = run_script("add '' '   '\nlist\n").unwrap();
        assert_eq!(output, "rejected: title is empty, description is empty\n");
    }

    #[test]
    fn priority_mode_hides_add_and_sort() {
        let output = run_script("show-priority\nadd a b\nsort\n").unwrap();
        assert_eq!(
            output,
            "mode: priority-only\n\
             unavailable: input is hidden in priority-only mode\n\
             unavailable: sorting is hidden in priority-only mode\n"
        );
    }

    #[test]
    fn delete_only_reaches_visible_cards() {
        let output = run_script("add plain body\nshow-priority\ndelete plain\nback\nlist\n").unwrap();
        assert!(output.contains("not shown: plain"));
        assert!(output.ends_with("- plain\n    body\n"));
    }

    #[test]
    fn list_json_emits_visible_cards() {
        let output = run_script("add a one -p\nadd b two\nshow-priority\nlist --json\n").unwrap();
        let start = output.find('[').unwrap();
        let cards: serde_json::Value = serde_json::from_str(&output[start..]).unwrap();
        let cards = cards.as_array().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0]["title"], "a");
        assert_eq!(cards[0]["priority"], true);
    }

    #[test]
    fn malformed_line_aborts_with_its_number() {
        let err = run_script("add a b\n\nfrobnicate\nlist\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3");
        assert!(format!("{err:#}").contains("unknown command: frobnicate"));
    }
}
