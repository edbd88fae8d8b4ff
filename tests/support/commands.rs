//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a page command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - PAGE_KEY_DIR / PAGE_STORE_DIR inside it
    /// - no XDG, EDITOR or PAGE_LOG variables leaking in from the host
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("page").expect("failed to find page binary");
        cmd.env("HOME", self.home.path());
        cmd.env("PAGE_KEY_DIR", self.key_dir());
        cmd.env("PAGE_STORE_DIR", self.store_dir());
        cmd.env("NO_COLOR", "1");
        for var in ["XDG_CONFIG_HOME", "XDG_DATA_HOME", "EDITOR", "PAGE_LOG"] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Shortcut for `page init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run page init")
    }

    /// Shortcut for `page ls`.
    pub fn ls(&self) -> Output {
        self.cmd().arg("ls").output().expect("failed to run page ls")
    }

    /// Shortcut for `page ls --json`.
    pub fn ls_json(&self) -> Output {
        self.cmd()
            .args(["ls", "--json"])
            .output()
            .expect("failed to run page ls --json")
    }

    /// Shortcut for `page open -p`.
    pub fn open_print(&self, name: &str) -> Output {
        self.cmd()
            .args(["open", "-p", name])
            .output()
            .expect("failed to run page open -p")
    }

    /// Shortcut for `page gen`.
    pub fn gen(&self, name: &str) -> Output {
        self.cmd()
            .args(["gen", name])
            .output()
            .expect("failed to run page gen")
    }

    /// Shortcut for `page gen -l <length>`.
    pub fn gen_length(&self, name: &str, length: usize) -> Output {
        self.cmd()
            .args(["gen", "-l", &length.to_string(), name])
            .output()
            .expect("failed to run page gen -l")
    }

    /// Shortcut for `page rm -f`.
    pub fn rm_force(&self, name: &str) -> Output {
        self.cmd()
            .args(["rm", "-f", name])
            .output()
            .expect("failed to run page rm -f")
    }

    /// `page rm` answering the confirmation prompt with `answer`.
    pub fn rm_answering(&self, name: &str, answer: &str) -> Output {
        self.cmd()
            .args(["rm", name])
            .write_stdin(answer)
            .output()
            .expect("failed to run page rm")
    }

    /// `page edit -e <editor>`.
    pub fn edit_with(&self, name: &str, editor: &str) -> Output {
        self.cmd()
            .args(["edit", "-e", editor, name])
            .output()
            .expect("failed to run page edit")
    }

    /// Write `content` into an entry through `page edit` and a scripted editor.
    pub fn write_entry(&self, name: &str, content: &str) -> Output {
        let editor = self.editor_writing(content);
        self.edit_with(name, &editor)
    }
}
