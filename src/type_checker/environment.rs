use std::{collections::HashMap, fmt::Display};

use log::debug;

use crate::ast::types::Type;

/// A declared variable. Only `initialized` changes after declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub symbol_type: Type,
    pub initialized: bool,
}

impl Symbol {
    pub fn new(name: String, symbol_type: Type, initialized: bool) -> Self {
        Symbol {
            name,
            symbol_type,
            initialized,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Symbol{{name='{}', type={}, initialized={}}}",
            self.name, self.symbol_type, self.initialized
        )
    }
}

/// The variables declared directly in one lexical scope.
#[derive(Debug, Default)]
pub struct Environment {
    pub variable_lookup: HashMap<String, Symbol>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    /// Returns false, leaving the scope untouched, if the name is taken here.
    pub fn declare_variable(&mut self, symbol: Symbol) -> bool {
        if self.variable_lookup.contains_key(&symbol.name) {
            return false;
        }

        self.variable_lookup.insert(symbol.name.clone(), symbol);
        true
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Symbol> {
        self.variable_lookup.get(variable_name)
    }

    pub fn get_variable_mut(&mut self, variable_name: &str) -> Option<&mut Symbol> {
        self.variable_lookup.get_mut(variable_name)
    }

    /// Symbols sorted by name.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.variable_lookup.values().collect();
        symbols.sort_by(|a, b| a.name.cmp(&b.name));
        symbols
    }
}

/// Stack of scopes. Index 0 is the global scope, which is never popped, so
/// the depth is always at least 1.
#[derive(Debug)]
pub struct SymbolTable {
    environments: Vec<Environment>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            environments: vec![Environment::new()],
        }
    }

    pub fn enter_scope(&mut self) {
        self.environments.push(Environment::new());
        debug!("entered scope, depth {}", self.depth());
    }

    pub fn exit_scope(&mut self) {
        if self.environments.len() > 1 {
            self.environments.pop();
            debug!("left scope, depth {}", self.depth());
        }
    }

    /// Declares `name` in the innermost scope. Shadowing an outer scope is
    /// allowed; redeclaring within the same scope returns false.
    pub fn declare(&mut self, name: &str, symbol_type: Type, initialized: bool) -> bool {
        self.current_environment_mut()
            .declare_variable(Symbol::new(name.to_string(), symbol_type, initialized))
    }

    /// Innermost-first lookup.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.environments
            .iter()
            .rev()
            .find_map(|environment| environment.get_variable(name))
    }

    /// No-op when the name does not resolve.
    pub fn mark_initialized(&mut self, name: &str) {
        if let Some(symbol) = self
            .environments
            .iter_mut()
            .rev()
            .find_map(|environment| environment.get_variable_mut(name))
        {
            symbol.initialized = true;
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn depth(&self) -> usize {
        self.environments.len()
    }

    /// Names declared in the innermost scope, sorted.
    pub fn current_scope_names(&self) -> Vec<String> {
        self.current_environment()
            .symbols()
            .into_iter()
            .map(|symbol| symbol.name.clone())
            .collect()
    }

    fn current_environment(&self) -> &Environment {
        &self.environments[self.environments.len() - 1]
    }

    fn current_environment_mut(&mut self) -> &mut Environment {
        let last = self.environments.len() - 1;
        &mut self.environments[last]
    }
}

/// Dumps every scope, innermost first.
impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Symbol table (depth {}):", self.depth())?;
        for (level, environment) in self.environments.iter().enumerate().rev() {
            writeln!(f, "  scope {}:", level)?;
            for symbol in environment.symbols() {
                writeln!(f, "    {}", symbol)?;
            }
        }
        Ok(())
    }
}
