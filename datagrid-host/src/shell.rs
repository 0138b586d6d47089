//! Line commands of the demo shell.

use datagrid::TableAction;
use datagrid::editor::EditorInput;
use datagrid::filter::NumberLookup;

use crate::error::ShellError;

/// Usage text printed by `help`.
pub const HELP: &str = "\
search <text>    type into the filter search box
quick            apply the quick filter for the search text
open <field>     open the filter editor for a field
set <value>      type into the open editor
op <>=|<=>       pick the number editor operator
yes | no         pick the boolean editor answer
submit | cancel  apply or close the open editor
rm <field>       remove a filter
clear            remove all filters
sort <field>     click a column header
unsort           clear the ordering
hover [row]      hover a row by position, or clear the hover
click <row>      click a row by position
next | prev      change page
size <n>         change the page size
show             print the table
help             print this text
quit             leave";

/// A parsed command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forwarded to the table.
    Action(TableAction),
    /// Clear the ordering.
    Unsort,
    /// Hover the row at a 1-based position, or clear the hover.
    Hover(Option<usize>),
    /// Click the row at a 1-based position.
    Click(usize),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines parse as [`Command::Show`].
pub fn parse(line: &str) -> Result<Command, ShellError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name {
        "" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "search" => Command::Action(TableAction::Search(rest.to_string())),
        "quick" => Command::Action(TableAction::SelectQuickFilter),
        "open" => Command::Action(TableAction::OpenEditor(word("open", rest, "a field")?)),
        "set" => Command::Action(TableAction::EditorInput(EditorInput::Text(rest.to_string()))),
        "op" => Command::Action(TableAction::EditorInput(EditorInput::Operator(operator(
            rest,
        )?))),
        "yes" => Command::Action(TableAction::EditorInput(EditorInput::Answer(true))),
        "no" => Command::Action(TableAction::EditorInput(EditorInput::Answer(false))),
        "submit" => Command::Action(TableAction::SubmitEditor),
        "cancel" => Command::Action(TableAction::CancelEditor),
        "rm" => Command::Action(TableAction::RemoveFilter(word("rm", rest, "a field")?)),
        "clear" => Command::Action(TableAction::ClearFilters),
        "sort" => Command::Action(TableAction::ClickHeader(word("sort", rest, "a column")?)),
        "unsort" => Command::Unsort,
        "hover" if rest.is_empty() => Command::Hover(None),
        "hover" => Command::Hover(Some(number(rest, "row position")?)),
        "click" => Command::Click(number(&word("click", rest, "a row position")?, "row position")?),
        "next" => Command::Action(TableAction::NextPage),
        "prev" => Command::Action(TableAction::PreviousPage),
        "size" => Command::Action(TableAction::SetPageSize(number(
            &word("size", rest, "a page size")?,
            "page size",
        )?)),
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn word(command: &'static str, rest: &str, expected: &'static str) -> Result<String, ShellError> {
    if rest.is_empty() {
        return Err(ShellError::MissingArgument { command, expected });
    }
    Ok(rest.to_string())
}

fn number(value: &str, expected: &'static str) -> Result<usize, ShellError> {
    value.parse().map_err(|_| ShellError::InvalidArgument {
        value: value.to_string(),
        expected,
    })
}

fn operator(value: &str) -> Result<NumberLookup, ShellError> {
    match value {
        ">=" | "gte" => Ok(NumberLookup::GreaterOrEqual),
        "<=" | "lte" => Ok(NumberLookup::LessOrEqual),
        "" => Err(ShellError::MissingArgument {
            command: "op",
            expected: "an operator (>= or <=)",
        }),
        other => Err(ShellError::InvalidArgument {
            value: other.to_string(),
            expected: "operator",
        }),
    }
}
