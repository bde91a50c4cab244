//! Interactive REPL
//!
//! Line-based REPL with rustyline for editing and history. Each submitted
//! line is one infix expression, translated independently; `:`-prefixed
//! commands control the session.

use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, EditMode, Editor};

use crate::translator::Translator;
use crate::{NAME, VERSION};

mod commands;
pub use commands::{CommandHandler, CommandResult};

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt to display
    pub prompt: String,
    /// Enable VI mode
    pub vi_mode: bool,
    /// History file path
    pub history_file: Option<PathBuf>,
    /// Maximum history size
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".into(),
            vi_mode: false,
            history_file: None,
            history_size: 1000,
        }
    }
}

/// Interactive translator REPL
pub struct Repl {
    /// Configuration
    config: ReplConfig,
    /// rustyline editor
    editor: Editor<(), FileHistory>,
    /// Translator for evaluation
    translator: Translator,
}

impl Repl {
    /// Create a new REPL with default configuration
    pub fn new() -> io::Result<Self> {
        Self::with_config(ReplConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: ReplConfig) -> io::Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .completion_type(CompletionType::List)
            .edit_mode(if config.vi_mode {
                EditMode::Vi
            } else {
                EditMode::Emacs
            })
            .build();

        let mut editor = Editor::with_config(rl_config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Readline error: {:?}", e)))?;

        // Load history if file exists
        if let Some(ref history_file) = config.history_file {
            if history_file.exists() {
                let _ = editor.load_history(history_file);
            }
        }

        Ok(Self {
            config,
            editor,
            translator: Translator::new(),
        })
    }

    /// Run the REPL
    pub fn run(&mut self) -> io::Result<()> {
        println!("{} {} - infix to postfix translator", NAME, VERSION);
        println!("Type :help for commands, :quit or Ctrl+D to exit\n");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    // Handle commands
                    if line.starts_with(':') {
                        let mut handler = CommandHandler::new(&self.translator);
                        match handler.handle(line) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                            CommandResult::Output(msg) => {
                                println!("{}", msg);
                                continue;
                            }
                        }
                    }

                    self.translate_line(line);
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl-D pressed
                    break;
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl-C pressed
                    println!("(Interrupted)");
                    continue;
                }
                Err(e) => {
                    return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
                }
            }
        }

        // Save history
        if let Some(ref history_file) = self.config.history_file {
            let _ = self.editor.save_history(history_file);
        }

        Ok(())
    }

    /// Translate one submitted expression and print the pair
    fn translate_line(&self, line: &str) {
        match self.translator.translate(line) {
            Ok(postfix) => {
                println!("Infix:   {}", line);
                println!("Postfix: {}", postfix);
            }
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
    }
}
