use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use spritekeys::config::Config;
use spritekeys::editor::EditorSession;
use spritekeys::input::ToolId;
use spritekeys::shortcuts::{Chord, KeyContext, ToolBox, WindowInfo, global};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SPRITEKEYS_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "spritekeys")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Keyboard shortcut dispatch for sprite editors"
)]
struct Cli {
    /// Config file to load instead of ~/.config/spritekeys/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// List every binding and its chords
    #[arg(long, short = 'l', action = ArgAction::SetTrue)]
    list: bool,

    /// Dispatch key presses, in order, and print what each one did
    #[arg(long, short = 'p', value_name = "CHORD", num_args = 1..)]
    press: Vec<String>,

    /// Hold a chord and print the quicktool it activates
    #[arg(long, value_name = "CHORD")]
    hold: Option<String>,

    /// Tool active before the first key press
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<String>,

    /// The document shows a selection mask
    #[arg(long, action = ArgAction::SetTrue)]
    selection: bool,

    /// A modal dialog is open over the main window
    #[arg(long, action = ArgAction::SetTrue)]
    modal: bool,

    /// Print the built-in configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", Config::default().to_toml_string()?);
        return Ok(());
    }

    if !cli.list && cli.press.is_empty() && cli.hold.is_none() {
        print_usage();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    global::init();
    let result = run(&cli, &config);
    global::shutdown();
    result
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let chords = global::with_registry_mut(|registry| config.keymap.apply_to(registry))
        .context("Failed to register keymap")?;
    log::info!("Registered {chords} shortcut chord(s)");

    let mut editor = build_editor(cli, config)?;

    if cli.list {
        list_bindings();
    }

    for chord in &cli.press {
        press(chord, &mut editor)?;
    }

    if let Some(chord) = &cli.hold {
        hold(chord, &editor)?;
    }

    Ok(())
}

fn build_editor(cli: &Cli, config: &Config) -> Result<EditorSession> {
    let mut editor = EditorSession::new();

    for tool in config.keymap.referenced_tools() {
        if !editor.has_tool(&ToolId::from(tool)) {
            log::warn!("Keymap binds unknown tool '{tool}'");
        }
    }

    for tool in &config.toolbar.hidden_tools {
        editor.set_tool_visible(&ToolId::new(tool.as_str()), false);
    }

    if let Some(tool) = &cli.tool {
        let tool = ToolId::new(tool.as_str());
        if !editor.has_tool(&tool) {
            bail!("Unknown tool '{tool}'");
        }
        editor.set_current_tool(tool);
    }

    editor.set_mask_visible(cli.selection);

    if cli.modal {
        editor.push_window(WindowInfo::modal());
    }

    Ok(editor)
}

fn list_bindings() {
    global::with_registry(|registry| {
        for binding in registry.iter() {
            let context = match binding.context() {
                KeyContext::Any => "",
                KeyContext::Normal => " [normal]",
                KeyContext::Selection => " [selection]",
            };
            println!(
                "{:<40} {}{}",
                binding.action().to_string(),
                binding.accelerator(),
                context
            );
        }
    });
}

fn press(chord: &str, editor: &mut EditorSession) -> Result<()> {
    let event = Chord::parse(chord)
        .with_context(|| format!("Invalid chord '{chord}'"))?
        .to_event();

    let tool_before = editor.current_tool();
    let commands_before = editor.executed().len();

    let handled = global::dispatch_key_down(&event, editor);

    let outcome = match editor.executed().get(commands_before) {
        Some(command) if command.params.is_empty() => format!("command {}", command.name),
        Some(command) => format!("command {}({})", command.name, command.params),
        None if !handled => "not handled".to_string(),
        None => match editor.current_tool() {
            Some(tool) if Some(&tool) != tool_before.as_ref() => format!("tool {tool}"),
            _ => "handled".to_string(),
        },
    };
    println!("{chord} -> {outcome}");
    Ok(())
}

fn hold(chord: &str, editor: &EditorSession) -> Result<()> {
    let keys = Chord::parse(chord)
        .with_context(|| format!("Invalid chord '{chord}'"))?
        .to_key_state();

    let current = editor.current_tool();
    match global::poll_quicktool(current.as_ref(), &keys, editor) {
        Some(tool) => println!("{chord} -> quicktool {tool}"),
        None => println!("{chord} -> no quicktool"),
    }
    Ok(())
}

fn print_usage() {
    println!("spritekeys: Keyboard shortcut dispatch for sprite editors");
    println!();
    println!("Usage:");
    println!("  spritekeys --list                  Show every binding");
    println!("  spritekeys --press Ctrl+Z B M      Dispatch key presses");
    println!("  spritekeys --hold Space            Resolve the quicktool for held keys");
    println!("  spritekeys --print-default-config  Print the built-in keymap");
    println!();
    println!("Simulated editor state:");
    println!("  --tool <TOOL>   Active tool (default: pencil)");
    println!("  --selection     Document shows a selection mask");
    println!("  --modal         A modal dialog is open");
    println!();
    println!("Keymap: ~/.config/spritekeys/config.toml (override with --config)");
}
