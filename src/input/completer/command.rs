use std::{borrow::Cow, collections::BTreeMap};

use rustyline::completion::Pair;

#[derive(Clone, Default)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
    aliases: BTreeMap<String, String>,
}

impl CommandCompleter {
    pub fn new<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let mut commands: Vec<_> = commands.into_iter().collect();
        commands.sort_unstable();
        Self {
            commands,
            aliases: BTreeMap::new(),
        }
    }

    pub fn update_aliases(&mut self, aliases: BTreeMap<Cow<'_, str>, Cow<'_, str>>) {
        self.aliases = aliases
            .into_iter()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let mut matches = Vec::new();
        let input = input.trim();

        self.add_command_matches(&mut matches, input);
        self.add_alias_matches(&mut matches, input);

        matches
    }

    fn add_command_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for cmd in self.commands.iter().filter(|cmd| cmd.starts_with(input)) {
            matches.push(Pair {
                display: cmd.to_string(),
                replacement: format!("{cmd} "),
            });
        }
    }

    fn add_alias_matches(&self, matches: &mut Vec<Pair>, input: &str) {
        for (alias, target) in self.aliases.iter().filter(|(a, _)| a.starts_with(input)) {
            matches.push(Pair {
                display: format!("{alias} (alias for {target})"),
                replacement: format!("{alias} "),
            });
        }
    }
}
