use std::io::Cursor;

use variable_group_copier_cli::console::TerminalConsole;
use variable_group_copier_core::config::Defaults;
use variable_group_copier_core::console::UserConsole;
use variable_group_copier_core::error::Error;
use variable_group_copier_core::parameters::ParameterPosition;
use variable_group_copier_core::resolver::ParametersResolver;

fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_read_line_strips_line_endings() {
    let mut console = console("ProjA\r\nGroup X\n");

    assert_eq!(console.read_line().unwrap(), "ProjA");
    assert_eq!(console.read_line().unwrap(), "Group X");
}

#[test]
fn test_read_line_at_end_of_input_fails() {
    let mut console = console("");

    assert!(matches!(console.read_line(), Err(Error::Stdio(_))));
}

#[test]
fn test_write_reaches_output() {
    let mut console = console("");
    console.write("Source group name: ").unwrap();

    let (_, output) = console.into_parts();
    assert_eq!(String::from_utf8(output).unwrap(), "Source group name: ");
}

#[test]
fn test_read_yes_no() {
    let mut console = console("y\nN\nyes\n");

    assert!(console.read_yes_no("Continue (Y/N)?").unwrap());
    assert!(!console.read_yes_no("Continue (Y/N)?").unwrap());
    assert!(!console.read_yes_no("Continue (Y/N)?").unwrap());

    let (_, output) = console.into_parts();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Continue (Y/N)? ".repeat(3)
    );
}

#[test]
fn test_resolver_prompts_through_terminal_console() {
    let mut resolver = ParametersResolver::new(console("\nProjA\n"), Defaults::default());

    let value = resolver
        .acquire_parameter(
            &[],
            ParameterPosition::SourceProject,
            None,
            &Default::default(),
        )
        .unwrap();

    assert_eq!(value, "ProjA");
    assert!(resolver.interactive_mode());
}

#[test]
fn test_closed_input_stops_prompting() {
    let mut resolver = ParametersResolver::new(console(""), Defaults::default());

    let result = resolver.acquire_parameters(&[], None);

    assert!(result.is_err());
}
