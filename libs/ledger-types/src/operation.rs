use soroban_sdk::{Env, String};

/// Arithmetic operations offered by the metered calculator
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Operation {
    /// Operator symbol carried in the `operated` event
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Rem => "%",
        }
    }

    pub fn symbol_string(&self, env: &Env) -> String {
        String::from_str(env, self.symbol())
    }
}
