use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default)]
pub struct AliasManager {
    aliases: HashMap<Box<str>, Box<str>>,
}

impl AliasManager {
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    pub fn add(&mut self, name: &str, command: &str) {
        self.aliases.insert(name.into(), command.into());
    }

    pub fn get<'a>(&'a self, cmd: &str) -> Option<Cow<'a, str>> {
        self.aliases.get(cmd).map(|s| Cow::Borrowed(&**s))
    }

    /// Replace the first word of `command` when it names an alias.
    ///
    /// Only the first word is touched so quoting in the arguments survives.
    pub fn expand_command<'a>(&'a self, command: &'a str) -> Cow<'a, str> {
        let trimmed = command.trim_start();
        let (first_word, rest) = match trimmed.find(char::is_whitespace) {
            Some(end) => trimmed.split_at(end),
            None => (trimmed, ""),
        };

        match self.get(first_word) {
            Some(alias_value) => Cow::Owned(format!("{alias_value}{rest}")),
            None => Cow::Borrowed(command),
        }
    }

    pub fn get_all(&self) -> BTreeMap<Cow<'_, str>, Cow<'_, str>> {
        self.aliases
            .iter()
            .map(|(k, v)| (Cow::Borrowed(&**k), Cow::Borrowed(&**v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_alias() {
        let mut manager = AliasManager::new();
        manager.add("l", "ls");
        assert_eq!(manager.get("l").as_deref(), Some("ls"));
    }

    #[test]
    fn test_expand_command_keeps_quotes() {
        let mut manager = AliasManager::new();
        manager.add("cp", "copy");

        let expanded = manager.expand_command("cp 'a  b.txt' dest");
        assert_eq!(expanded, "copy 'a  b.txt' dest");
    }

    #[test]
    fn test_no_expansion_needed() {
        let manager = AliasManager::new();
        let command = "ls docs";
        let expanded = manager.expand_command(command);
        assert!(matches!(expanded, Cow::Borrowed(_)));
        assert_eq!(expanded, command);
    }

    #[test]
    fn test_get_all() {
        let mut manager = AliasManager::new();
        manager.add("l", "ls");
        manager.add("up", "cd ..");

        let all = manager.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all.get("up").map(|v| v.as_ref()), Some("cd .."));
    }
}
