use super::{Command, CommandContext, CommandError};
use crate::fs::ops::list_dir;
use crate::highlight::SyntaxHighlighter;

#[derive(Clone)]
pub struct LsCommand {
    highlighter: SyntaxHighlighter,
}

impl LsCommand {
    pub fn new(highlighter: SyntaxHighlighter) -> Self {
        Self { highlighter }
    }
}

impl Command for LsCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<(), CommandError> {
        let dir = ctx.session.resolve_directory(&args.join(" "))?;

        for entry in list_dir(&dir)? {
            if entry.is_symlink {
                writeln!(ctx.out, "[LINK] {}", entry.name)?;
            } else if entry.is_dir {
                writeln!(ctx.out, "[DIR]  {}", self.highlighter.highlight_dir(&entry.name))?;
            } else {
                writeln!(ctx.out, "[FILE] {}", entry.name)?;
            }
        }
        Ok(())
    }

    fn usage(&self) -> &'static str {
        "ls [dir]"
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::Harness;

    #[test]
    fn test_ls_lists_sorted_with_tags() {
        let mut h = Harness::new();
        h.write("zeta.txt", "z");
        h.write("alpha/inner.txt", "a");

        h.run("ls").expect("ls");
        assert_eq!(h.output(), "[DIR]  alpha\n[FILE] zeta.txt\n");
    }

    #[test]
    fn test_ls_other_directory() {
        let mut h = Harness::new();
        h.write("alpha/inner.txt", "a");

        h.run("ls alpha").expect("ls alpha");
        assert_eq!(h.output(), "[FILE] inner.txt\n");
        assert_eq!(h.cwd(), h.root);
    }

    #[cfg(unix)]
    #[test]
    fn test_ls_tags_links() {
        let mut h = Harness::new();
        h.write("real/x.txt", "x");
        std::os::unix::fs::symlink(h.path("real"), h.path("shortcut")).expect("symlink");

        h.run("ls").expect("ls");
        assert_eq!(h.output(), "[DIR]  real\n[LINK] shortcut\n");
    }

    #[test]
    fn test_ls_empty_directory() {
        let mut h = Harness::new();
        h.run("ls").expect("ls");
        assert!(h.output().is_empty());
    }
}
