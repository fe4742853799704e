/// A named numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: f64,
}

/// The variables of an interpreter session, in the order they were assigned.
///
/// Every assignment appends a fresh entry, even when the name
/// already exists; existing entries with that name are updated
/// in place first, so all entries for a name hold the same value.
/// Lookups resolve to the earliest entry.
/// Reassigning one name in a loop therefore grows the sequence.
#[derive(Debug, Default)]
pub struct Environment {
    variables: Vec<Variable>,
    /// Index of the most recently assigned variable, what `het` refers to.
    last: Option<usize>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment::default()
    }

    /// The value of the earliest variable called `name`.
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value)
    }

    /// The most recently assigned variable, if anything was assigned.
    pub fn last(&self) -> Option<&Variable> {
        self.last.map(|index| &self.variables[index])
    }

    pub fn assign(&mut self, name: &str, value: f64) {
        for (index, variable) in self.variables.iter_mut().enumerate() {
            if variable.name == name {
                variable.value = value;
                self.last = Some(index);
            }
        }

        self.last = Some(self.variables.len());
        self.variables.push(Variable {
            name: name.to_string(),
            value,
        });
    }

    /// All entries, oldest first, duplicates included.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let env = Environment::new();
        assert_eq!(env.lookup("x"), None);
        assert_eq!(env.last(), None);
        assert!(env.variables().is_empty());
    }

    #[test]
    fn reassignment_appends() {
        let mut env = Environment::new();
        env.assign("x", 1.0);
        env.assign("y", 2.0);
        env.assign("x", 3.0);

        let names: Vec<&str> =
            env.variables().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "x"]);
        assert_eq!(env.variables()[0].value, 3.0);
        assert_eq!(env.lookup("x"), Some(3.0));
        assert_eq!(env.last().unwrap(), &env.variables()[2]);
    }

    #[test]
    fn last_follows_assignment() {
        let mut env = Environment::new();
        env.assign("x", 1.0);
        env.assign("y", 2.0);
        assert_eq!(env.last().unwrap().name, "y");
        env.assign("x", 4.0);
        assert_eq!(env.last().unwrap().name, "x");
        assert_eq!(env.last().unwrap().value, 4.0);
    }
}
