use std::io::{BufRead, Write};

use tracing::debug;

use crate::command::{self, Command};
use crate::error::FsError;
use crate::tree::{Node, NodeId, Tree};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

enum Flow {
    Continue,
    Exit,
}

/// Interactive shell over a tree: holds the tree and a cursor (the working
/// folder) and runs a read-eval-print loop over any line-oriented streams.
///
/// Every failure is rendered as a message line and the loop continues; the
/// only ways out are `exit` and end of input.
pub struct Shell {
    tree: Tree,
    cursor: NodeId,
}

impl Shell {
    pub fn new(tree: Tree) -> Self {
        let cursor = tree.root();
        Self { tree, cursor }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Main loop: prompt, read one line, dispatch. EOF terminates like
    /// `exit`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<(), FsError> {
        loop {
            write!(output, "{} > ", self.tree.path(self.cursor))?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\n', '\r']);

            let cmd = command::parse(line);
            debug!(?cmd, "dispatch");
            match self.dispatch(cmd, &mut output)? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, FsError> {
        match cmd {
            Command::Exit => return Ok(Flow::Exit),
            Command::Clear => write!(out, "{}", CLEAR_SCREEN)?,
            Command::List => {
                for line in self.tree.children_lines(self.cursor) {
                    writeln!(out, "{}", line)?;
                }
            }
            Command::ListAll => {
                for line in self.tree.subtree_lines(self.cursor) {
                    writeln!(out, "{}", line)?;
                }
            }
            Command::ChangeDir(name) => self.change_dir(&name, out)?,
            Command::Touch(name) => {
                if let Err(e) = self.tree.create(self.cursor, Node::file(name, 0, "", "")) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::MkDir(name) => {
                if let Err(e) = self.tree.create(self.cursor, Node::folder(name)) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::Remove(name) => self.remove(&name, out)?,
            Command::Move(src, dst) => self.transfer(&src, &dst, false, out)?,
            Command::Copy(src, dst) => self.transfer(&src, &dst, true, out)?,
            Command::Find(name) => match self.tree.find(self.cursor, &name) {
                Some(id) => writeln!(out, "Found {} at {}", name, self.tree.path(id))?,
                None => writeln!(out, "{} not found.", name)?,
            },
            Command::Rename(old, new) => match self.tree.find(self.cursor, &old) {
                Some(id) => {
                    if let Err(e) = self.tree.rename(id, new) {
                        writeln!(out, "{}", e)?;
                    }
                }
                None => writeln!(out, "File or folder not found.")?,
            },
            Command::Stat(name) => match self.tree.find(self.cursor, &name) {
                Some(id) => match self.tree.details(id) {
                    Ok(details) => writeln!(out, "{}", details)?,
                    Err(e) => writeln!(out, "{}", e)?,
                },
                None => writeln!(out, "File or folder not found.")?,
            },
            Command::Invalid => writeln!(out, "Invalid command.")?,
        }
        Ok(Flow::Continue)
    }

    fn change_dir<W: Write>(&mut self, name: &str, out: &mut W) -> Result<(), FsError> {
        if name == ".." {
            match self.tree.get(self.cursor).and_then(|n| n.parent()) {
                Some(parent) => self.cursor = parent,
                None => writeln!(out, "Already at root folder.")?,
            }
            return Ok(());
        }
        match self.tree.find(self.cursor, name) {
            Some(id) if self.tree.get(id).is_some_and(|n| n.is_folder()) => self.cursor = id,
            _ => writeln!(out, "Folder not found.")?,
        }
        Ok(())
    }

    fn remove<W: Write>(&mut self, name: &str, out: &mut W) -> Result<(), FsError> {
        let id = match self.tree.find(self.cursor, name) {
            Some(id) => id,
            None => {
                writeln!(out, "File or folder not found.")?;
                return Ok(());
            }
        };
        // Removing the working folder (or one of its ancestors) would strand
        // the cursor; step it up to the removed node's parent first.
        if self.tree.subtree_contains(id, self.cursor) {
            if let Some(parent) = self.tree.get(id).and_then(|n| n.parent()) {
                self.cursor = parent;
            }
        }
        if let Err(e) = self.tree.remove(id) {
            writeln!(out, "{}", e)?;
        }
        Ok(())
    }

    fn transfer<W: Write>(
        &mut self,
        src: &str,
        dst: &str,
        copy: bool,
        out: &mut W,
    ) -> Result<(), FsError> {
        let src_id = self.tree.find(self.cursor, src);
        let dst_id = self.tree.find(self.cursor, dst);
        let (src_id, dst_id) = match (src_id, dst_id) {
            (Some(s), Some(d)) if self.tree.get(d).is_some_and(|n| n.is_folder()) => (s, d),
            _ => {
                writeln!(out, "Invalid source or destination.")?;
                return Ok(());
            }
        };
        let result = if copy {
            self.tree.copy_node(src_id, dst_id).map(|_| ())
        } else {
            self.tree.move_node(src_id, dst_id)
        };
        if result.is_err() {
            writeln!(out, "Invalid source or destination.")?;
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
