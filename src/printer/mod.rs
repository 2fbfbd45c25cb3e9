//! Drawing trees on the terminal.
//!
//! The printer places every node's key on a grid of character cells: nodes at depth *d* go on row *2d*, and the row below holds the connectors to their children, drawn with box-drawing characters. Labels are written in inverted colors so that they stand out from the connectors.
//!
//! ```text
//!          1
//!     ┌───┘ └───┐
//!     2         3
//!  ┌─┘ └─┐   ┌─┘ └─┐
//!  4     5   6     7
//! ```
//!
//! The printer only reads keys and children, so any [`BinaryNode`] with a [`Display`] key can be drawn.
//!
//! [`BinaryNode`]: ../traversal/trait.BinaryNode.html " "
//! [`Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html " "

use std::{
    fmt::Display,
    io::{self, Write},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use crate::traversal::BinaryNode;

mod canvas;
use canvas::Canvas;


/// Settings for drawing a tree.
#[derive(Clone, Debug)]
pub struct PrintOptions {
    top_margin: usize,
    left_margin: usize,
    color_choice: ColorChoice,
    label_color: ColorSpec,
}
impl PrintOptions {
    /// Sets the number of empty lines written before the tree, and the number of columns left empty to the left of the leftmost label.
    #[inline]
    pub fn margins(mut self, top: usize, left: usize) -> Self {
        self.top_margin = top;
        self.left_margin = left;
        self
    }
    /// Sets whether [`print_tree`] emits colors.
    ///
    /// Has no effect on [`write_tree`], which leaves that decision to the writer.
    ///
    /// [`print_tree`]: fn.print_tree.html " "
    /// [`write_tree`]: fn.write_tree.html " "
    #[inline]
    pub fn color_choice(mut self, color_choice: ColorChoice) -> Self {
        self.color_choice = color_choice;
        self
    }
    /// Sets the color used for node labels. Connectors always use the writer's default colors.
    #[inline]
    pub fn label_color(mut self, label_color: ColorSpec) -> Self {
        self.label_color = label_color;
        self
    }
}
impl Default for PrintOptions {
    /// Two lines of top margin, two columns of left margin, automatic color detection and black-on-white labels.
    fn default() -> Self {
        let mut label_color = ColorSpec::new();
        label_color
            .set_fg(Some(Color::Black))
            .set_bg(Some(Color::White));
        Self {
            top_margin: 2,
            left_margin: 2,
            color_choice: ColorChoice::Auto,
            label_color,
        }
    }
}

/// Draws the tree to standard output. Nothing is written if `root` is `None`.
///
/// # Errors
/// Fails if writing to standard output fails.
pub fn print_tree<N>(root: Option<&N>, options: &PrintOptions) -> io::Result<()>
where
    N: BinaryNode,
    N::Key: Display,
{
    let mut stdout = StandardStream::stdout(options.color_choice);
    write_tree(&mut stdout, root, options)?;
    stdout.flush()
}

/// Draws the tree to the specified color-capable writer. Nothing is written if `root` is `None`.
///
/// # Errors
/// Propagates the writer's errors.
pub fn write_tree<W, N>(out: &mut W, root: Option<&N>, options: &PrintOptions) -> io::Result<()>
where
    W: WriteColor,
    N: BinaryNode,
    N::Key: Display,
{
    let root = match root {
        Some(root) => root,
        None => return Ok(()),
    };
    let canvas = lay_out(root, options.left_margin);
    for _ in 0..options.top_margin {
        writeln!(out)?;
    }
    for row in canvas.rows() {
        let mut run = String::new();
        let mut in_label = false;
        for cell in row {
            if cell.is_label() != in_label {
                flush_run(out, &mut run, in_label, options)?;
                in_label = cell.is_label();
            }
            run.push(cell.char());
        }
        flush_run(out, &mut run, in_label, options)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Draws the tree into a string, without colors. Returns an empty string if `root` is `None`.
pub fn render_to_string<N>(root: Option<&N>, options: &PrintOptions) -> String
where
    N: BinaryNode,
    N::Key: Display,
{
    let root = match root {
        Some(root) => root,
        None => return String::new(),
    };
    let canvas = lay_out(root, options.left_margin);
    let mut output = "\n".repeat(options.top_margin);
    for row in canvas.rows() {
        output.extend(row.iter().map(|x| x.char()));
        output.push('\n');
    }
    output
}

fn flush_run<W: WriteColor>(
    out: &mut W,
    run: &mut String,
    in_label: bool,
    options: &PrintOptions,
) -> io::Result<()> {
    if run.is_empty() {
        return Ok(());
    }
    if in_label {
        out.set_color(&options.label_color)?;
        out.write_all(run.as_bytes())?;
        out.reset()?;
    } else {
        out.write_all(run.as_bytes())?;
    }
    run.clear();
    Ok(())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A node's position during layout. Parent and children are indices into the slot list.
#[derive(Debug)]
struct Slot<'a, N> {
    node: &'a N,
    label: String,
    width: usize,
    start: usize,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}
impl<'a, N> Slot<'a, N> {
    fn new(node: &'a N, label: String, start: usize) -> Self {
        Self {
            node,
            width: label.chars().count(),
            label,
            start,
            parent: None,
            left: None,
            right: None,
        }
    }
    #[inline(always)]
    const fn end(&self) -> usize {
        self.start + self.width
    }
    #[inline(always)]
    fn set_end(&mut self, end: usize) {
        self.start = end.saturating_sub(self.width);
    }
    #[inline(always)]
    const fn centre(&self) -> usize {
        self.start + self.width / 2
    }
}

/// Computes the columns of every node and draws them onto a canvas.
///
/// Nodes are placed in pre-order, left subtree first, each one right after the previous node on the same level. A node only gets drawn once both of its subtrees are done, because finishing a subtree moves the parent: after the left subtree it starts where the left child ends, and after the right one it is centred between its children.
fn lay_out<N>(root: &N, left_margin: usize) -> Canvas
where
    N: BinaryNode,
    N::Key: Display,
{
    let mut slots: Vec<Slot<'_, N>> = Vec::new();
    let mut last_on_level: Vec<usize> = Vec::new();
    let mut canvas = Canvas::default();
    let mut next = Some((root, Side::Left));
    let mut level = 0;
    while let Some((node, side)) = next.take() {
        let mut item = slots.len();
        let start = match last_on_level.get_mut(level) {
            Some(last) => {
                let start = slots[*last].end() + 1;
                *last = item;
                start
            }
            None => {
                last_on_level.push(item);
                left_margin
            }
        };
        slots.push(Slot::new(node, format!(" {} ", node.key()), start));
        if level > 0 {
            let parent = last_on_level[level - 1];
            slots[item].parent = Some(parent);
            match side {
                Side::Left => {
                    slots[parent].left = Some(item);
                    let end = slots[item].end().max(slots[parent].start);
                    slots[item].set_end(end);
                }
                Side::Right => {
                    slots[parent].right = Some(item);
                    let start = slots[item].start.max(slots[parent].end());
                    slots[item].start = start;
                }
            }
        }

        next = node
            .left()
            .map(|x| (x, Side::Left))
            .or_else(|| node.right().map(|x| (x, Side::Right)));
        // Climb back up for as long as there is no unvisited right subtree
        while next.is_none() {
            draw_slot(&mut canvas, &slots, item, level);
            let parent = match slots[item].parent {
                Some(parent) => parent,
                None => {
                    log::debug!(
                        "laid out {} nodes on {} levels, {} columns wide",
                        slots.len(),
                        last_on_level.len(),
                        canvas.width(),
                    );
                    return canvas;
                }
            };
            level -= 1;
            if slots[parent].left == Some(item) {
                slots[parent].start = slots[item].end();
                let parent_node = slots[parent].node;
                next = parent_node.right().map(|x| (x, Side::Right));
            } else if slots[parent].left.is_none() {
                let end = slots[item].start;
                slots[parent].set_end(end);
            } else {
                let shift = slots[item].start.saturating_sub(slots[parent].end()) / 2;
                slots[parent].start += shift;
            }
            item = parent;
        }
        level += 1;
    }
    canvas
}

fn draw_slot<N>(canvas: &mut Canvas, slots: &[Slot<'_, N>], index: usize, level: usize) {
    let slot = &slots[index];
    let row = level * 2;
    canvas.write_label(row, slot.start, &slot.label);
    if let Some(left) = slot.left {
        canvas.draw_link(row + 1, ('┌', '┘'), slots[left].centre(), slot.start);
    }
    if let Some(right) = slot.right {
        canvas.draw_link(row + 1, ('└', '┐'), slot.end() - 1, slots[right].centre());
    }
}
