//! REPL command handler
//!
//! Handles special commands starting with ':'.

use std::path::Path;

use owo_colors::OwoColorize;

use crate::translator::Translator;

/// Command result
#[derive(Debug)]
pub enum CommandResult {
    /// Exit the REPL
    Exit,
    /// Continue to next input
    Continue,
    /// Output a message
    Output(String),
}

/// Command handler for the REPL
pub struct CommandHandler<'a> {
    translator: &'a Translator,
}

impl<'a> CommandHandler<'a> {
    /// Create a new command handler
    pub fn new(translator: &'a Translator) -> Self {
        Self { translator }
    }

    /// Handle a command line
    pub fn handle(&mut self, line: &str) -> CommandResult {
        let cmd = line.trim_start_matches(':').trim();
        let parts: Vec<&str> = cmd.split_whitespace().collect();

        match parts.first().copied().unwrap_or("") {
            "quit" | "q" => CommandResult::Exit,
            "help" | "h" => {
                self.print_help();
                CommandResult::Continue
            }
            "file" | "f" => {
                if let Some(path) = parts.get(1) {
                    self.translate_file(Path::new(path));
                } else {
                    println!("Usage: :file <path>");
                }
                CommandResult::Continue
            }
            "" => CommandResult::Continue,
            _ => CommandResult::Output(format!("Unknown command: {}", line)),
        }
    }

    /// Translate a batch file and print each pair in file order
    fn translate_file(&self, path: &Path) {
        match crate::translate_file_with(self.translator, path) {
            Ok(lines) => {
                for line in lines {
                    match line.postfix {
                        Ok(postfix) => {
                            println!("Infix:   {}", line.infix);
                            println!("Postfix: {}", postfix);
                        }
                        Err(e) => {
                            eprintln!("{} {}: {}", "error:".red().bold(), line.infix, e);
                        }
                    }
                }
            }
            Err(e) => eprintln!("{} {:#}", "error:".red().bold(), e),
        }
    }

    fn print_help(&self) {
        println!("Enter an infix expression to translate it to postfix.");
        println!("Operands are single digits 0-9, operators are + - * / ^,");
        println!("and parentheses group subexpressions.");
        println!();
        println!("Commands:");
        println!("  :help, :h           Show this help");
        println!("  :file <path>, :f    Translate each line of a text file");
        println!("  :quit, :q           Exit");
    }
}
