use crate::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::Editor;

const PROMPT: &str = "Lisp>>> ";

pub struct Repl {
    interpreter: Interpreter,
    editor: Editor<()>,
}

impl Repl {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            editor: Editor::<()>::new(),
        }
    }

    // main read-eval-print loop
    pub fn run_loop(&mut self) -> anyhow::Result<()> {
        loop {
            let readline = self.editor.readline(PROMPT);

            match readline {
                Ok(line) => {
                    if line.trim() == "quit" {
                        break;
                    }
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line.as_str());
                    self.eval(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    // errors print their message in place of a value and the loop carries on
    fn eval(&mut self, line: &str) {
        match self.interpreter.run_string(line) {
            Ok(v) => println!("{}", self.interpreter.write(&v)),
            Err(e) => println!("{}", e),
        }
    }
}
