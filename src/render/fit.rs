use crate::{Doc, DocPtr};

use super::{write::write_spaces, Render};

pub fn best<'a, W, T>(doc: &Doc<'a, T>, width: usize, out: &mut W) -> Result<(), W::Error>
where
    T: DocPtr<'a> + 'a,
    W: ?Sized + Render,
{
    Best {
        pos: 0,
        pending_indent: 0,
        bcmds: vec![Cmd {
            ind: 0,
            root: 0,
            mode: Mode::Break,
            doc,
        }],
        fcmds: vec![],
        line_suffixes: vec![],
        width,
    }
    .best(out)
}

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Mode {
    Break,
    Flat,
}

struct Cmd<'d, 'a, T>
where
    T: DocPtr<'a>,
{
    ind: usize,
    root: usize,
    mode: Mode,
    doc: &'d Doc<'a, T>,
}

impl<'a, T> Clone for Cmd<'_, 'a, T>
where
    T: DocPtr<'a>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cmd<'_, 'a, T> where T: DocPtr<'a> {}

struct Best<'d, 'a, T>
where
    T: DocPtr<'a> + 'a,
{
    pos: usize,
    /// Indentation owed to the current line, written before its first text.
    pending_indent: usize,
    bcmds: Vec<Cmd<'d, 'a, T>>,
    fcmds: Vec<(Mode, &'d Doc<'a, T>)>,
    line_suffixes: Vec<Cmd<'d, 'a, T>>,
    width: usize,
}

impl<'d, 'a, T> Best<'d, 'a, T>
where
    T: DocPtr<'a> + 'a,
{
    fn best<W>(&mut self, out: &mut W) -> Result<(), W::Error>
    where
        W: ?Sized + Render,
    {
        loop {
            let Some(mut cmd) = self.bcmds.pop() else {
                if self.line_suffixes.is_empty() {
                    return Ok(());
                }
                self.flush_line_suffixes();
                continue;
            };
            loop {
                let Cmd {
                    ind,
                    root,
                    mode,
                    doc,
                } = cmd;
                match *doc {
                    Doc::Nil => {}
                    Doc::Append(ref ldoc, ref rdoc) => {
                        cmd.doc = append_docs2(ldoc, rdoc, |doc| {
                            self.bcmds.push(Cmd {
                                ind,
                                root,
                                mode,
                                doc,
                            })
                        });
                        continue;
                    }
                    Doc::FlatAlt(ref b, ref f) => {
                        cmd.doc = match mode {
                            Mode::Break => &**b,
                            Mode::Flat => &**f,
                        };
                        continue;
                    }
                    Doc::Group(ref inner) => {
                        if mode == Mode::Break && self.fitting(inner, self.pos) {
                            cmd.mode = Mode::Flat;
                        }
                        cmd.doc = &**inner;
                        continue;
                    }
                    Doc::Nest(off, ref inner) => {
                        cmd.ind = ind.saturating_add_signed(off);
                        cmd.doc = &**inner;
                        continue;
                    }
                    Doc::Root(ref inner) => {
                        cmd.root = ind;
                        cmd.doc = &**inner;
                        continue;
                    }
                    Doc::LineSuffix(ref inner) => {
                        self.line_suffixes.push(Cmd {
                            doc: &**inner,
                            ..cmd
                        });
                    }
                    Doc::Hardline | Doc::LiteralLine => {
                        if !self.line_suffixes.is_empty() {
                            // Print whatever was deferred to the end of this line first
                            self.bcmds.push(cmd);
                            self.flush_line_suffixes();
                        } else {
                            let indent = match *doc {
                                Doc::LiteralLine => root,
                                _ => ind,
                            };
                            out.write_str_all("\n")?;
                            self.pending_indent = indent;
                            self.pos = indent;
                        }
                    }
                    Doc::RenderLen(len, ref text) => {
                        if let Some(s) = text.as_text() {
                            self.write_text(s, len, out)?;
                        }
                    }
                    Doc::OwnedText(ref s) => self.write_text(s, s.len(), out)?,
                    Doc::BorrowedText(s) => self.write_text(s, s.len(), out)?,
                }

                break;
            }
        }
    }

    fn flush_line_suffixes(&mut self) {
        let suffixes = self.line_suffixes.drain(..).rev();
        self.bcmds.extend(suffixes);
    }

    fn write_text<W>(&mut self, s: &str, len: usize, out: &mut W) -> Result<(), W::Error>
    where
        W: ?Sized + Render,
    {
        if self.pending_indent > 0 {
            write_spaces(self.pending_indent, out)?;
            self.pending_indent = 0;
        }
        out.write_str_all(s)?;
        self.pos += len;
        Ok(())
    }

    /// Whether `next` fits flat on the current line, together with whatever follows it up to the
    /// next line break.
    fn fitting(&mut self, next: &'d Doc<'a, T>, mut pos: usize) -> bool {
        let mut bidx = self.bcmds.len();
        self.fcmds.clear(); // clear from previous calls from best
        self.fcmds.push((Mode::Flat, next));

        // Set once the group itself is measured and the remaining commands are being checked
        let mut rest = false;
        loop {
            let (mode, mut doc) = match self.fcmds.pop() {
                None => {
                    if bidx == 0 {
                        // All commands have been processed
                        return true;
                    } else {
                        bidx -= 1;
                        rest = true;
                        let cmd = self.bcmds[bidx];
                        (cmd.mode, cmd.doc)
                    }
                }
                Some(cmd) => cmd,
            };

            loop {
                match *doc {
                    Doc::Nil | Doc::LineSuffix(_) => {}
                    Doc::Append(ref ldoc, ref rdoc) => {
                        doc = append_docs2(ldoc, rdoc, |doc| self.fcmds.push((mode, doc)));
                        continue;
                    }
                    // Newlines inside the group makes it not fit, but those outside lets it
                    // fit on the current line
                    Doc::Hardline => return rest,
                    Doc::LiteralLine => return true,
                    Doc::RenderLen(len, _) => {
                        pos += len;
                        if pos > self.width {
                            return false;
                        }
                    }
                    Doc::BorrowedText(str) => {
                        pos += str.len();
                        if pos > self.width {
                            return false;
                        }
                    }
                    Doc::OwnedText(ref str) => {
                        pos += str.len();
                        if pos > self.width {
                            return false;
                        }
                    }
                    Doc::FlatAlt(ref b, ref f) => {
                        doc = match mode {
                            Mode::Break => &**b,
                            Mode::Flat => &**f,
                        };
                        continue;
                    }
                    Doc::Nest(_, ref next) | Doc::Group(ref next) | Doc::Root(ref next) => {
                        doc = &**next;
                        continue;
                    }
                }
                break;
            }
        }
    }
}

fn append_docs2<'a, 'd, T>(
    ldoc: &'d T,
    rdoc: &'d T,
    mut consumer: impl FnMut(&'d Doc<'a, T>),
) -> &'d Doc<'a, T>
where
    T: DocPtr<'a>,
{
    let d = append_docs(rdoc, &mut consumer);
    consumer(d);
    append_docs(ldoc, &mut consumer)
}

fn append_docs<'a, 'd, T>(
    mut doc: &'d Doc<'a, T>,
    consumer: &mut impl FnMut(&'d Doc<'a, T>),
) -> &'d Doc<'a, T>
where
    T: DocPtr<'a>,
{
    loop {
        // Since appended documents often appear in sequence on the left side we
        // gain a slight performance increase by batching these pushes (avoiding
        // to push and directly pop `Append` documents)
        match doc {
            Doc::Append(l, r) => {
                consumer(r);
                doc = l;
            }
            _ => return doc,
        }
    }
}
