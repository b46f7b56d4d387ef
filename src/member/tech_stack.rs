use dto::member_form::TechStackInput;

pub const TECH_STACK_DELIMITER: char = ',';

/// Ordered list of technologies a member works with.
/// Entries are trimmed, never empty and never repeated (comparison is case-sensitive).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TechStack {
    entries: Vec<String>,
}

impl TechStack {
    /// Parse a comma-separated list, such as `React, Node.js`.
    pub fn parse(input: &str) -> Self {
        let mut tech_stack = Self::default();
        tech_stack.push(input);
        tech_stack
    }

    /// Append one entry. Commas within `entry` split it into several entries.
    pub fn push(&mut self, entry: &str) {
        for piece in entry.split(TECH_STACK_DELIMITER) {
            let piece = piece.trim();
            if !piece.is_empty() && !self.entries.iter().any(|known| known == piece) {
                self.entries.push(piece.to_owned());
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl From<&TechStackInput> for TechStack {
    fn from(input: &TechStackInput) -> Self {
        match input {
            TechStackInput::Delimited(input) => TechStack::parse(input),
            TechStackInput::Entries(entries) => {
                let mut tech_stack = TechStack::default();
                entries.iter().for_each(|entry| tech_stack.push(entry));
                tech_stack
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        input = {"React, , Node.js ,React", "", " , ,", "ROS", "ROS,ros"},
        expected_entries = {vec!["React", "Node.js"], vec![], vec![], vec!["ROS"], vec!["ROS", "ros"]}
    )]
    fn should_parse_tech_stack(input: &str, expected_entries: Vec<&str>) {
        assert_eq!(expected_entries, TechStack::parse(input).entries());
    }

    #[test]
    fn should_push_entries_one_by_one() {
        let mut tech_stack = TechStack::default();
        tech_stack.push(" Arduino ");
        tech_stack.push("");
        tech_stack.push("Arduino");
        tech_stack.push("OpenCV, PyTorch");

        assert_eq!(
            vec!["Arduino", "OpenCV", "PyTorch"],
            tech_stack.into_entries()
        );
    }

    #[test]
    fn should_normalize_entries_input() {
        let input = TechStackInput::Entries(vec![
            "React".to_owned(),
            "  ".to_owned(),
            "Node.js, React".to_owned(),
        ]);

        assert_eq!(vec!["React", "Node.js"], TechStack::from(&input).entries());
    }

    #[test]
    fn should_normalize_delimited_input() {
        let input = TechStackInput::Delimited("React, , Node.js ,React".to_owned());

        assert_eq!(vec!["React", "Node.js"], TechStack::from(&input).entries());
    }
}
