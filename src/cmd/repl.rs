use crate::repl::Repl;
use crate::Interpreter;

pub fn execute() -> anyhow::Result<()> {
    let interpreter = Interpreter::new();
    let mut repl = Repl::new(interpreter);

    repl.run_loop()
}
