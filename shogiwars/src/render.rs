//! 表格输出
//!
//! 支持对齐的 ASCII 表格与 TSV 两种格式

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

/// 表格渲染器
pub trait Renderer {
    /// 设置表头
    fn set_header(&mut self, cols: Vec<String>);

    /// 追加一行
    fn append(&mut self, cols: Vec<String>);

    /// 输出全部内容
    fn render(&self, w: &mut dyn Write) -> io::Result<()>;
}

/// TSV 输出
#[derive(Debug, Default)]
pub struct TsvRenderer {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl TsvRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for TsvRenderer {
    fn set_header(&mut self, cols: Vec<String>) {
        self.header = Some(cols);
    }

    fn append(&mut self, cols: Vec<String>) {
        self.rows.push(cols);
    }

    fn render(&self, w: &mut dyn Write) -> io::Result<()> {
        for cols in self.header.iter().chain(self.rows.iter()) {
            writeln!(w, "{}", cols.join("\t"))?;
        }
        Ok(())
    }
}

/// 带边框的左对齐表格，列宽按终端显示宽度计算
#[derive(Debug, Default)]
pub struct TableRenderer {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for cols in self.header.iter().chain(self.rows.iter()) {
            for (i, col) in cols.iter().enumerate() {
                let w = col.width();
                match widths.get_mut(i) {
                    Some(max) => *max = (*max).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
    }
}

fn write_border(w: &mut dyn Write, widths: &[usize]) -> io::Result<()> {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    writeln!(w, "{}", line)
}

fn write_row(w: &mut dyn Write, widths: &[usize], cols: &[String]) -> io::Result<()> {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let col = cols.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(col);
        line.push_str(&" ".repeat(width - col.width()));
        line.push_str(" |");
    }
    writeln!(w, "{}", line)
}

impl Renderer for TableRenderer {
    fn set_header(&mut self, cols: Vec<String>) {
        self.header = Some(cols);
    }

    fn append(&mut self, cols: Vec<String>) {
        self.rows.push(cols);
    }

    fn render(&self, w: &mut dyn Write) -> io::Result<()> {
        let widths = self.column_widths();
        if widths.is_empty() {
            return Ok(());
        }

        write_border(w, &widths)?;
        if let Some(header) = &self.header {
            write_row(w, &widths, header)?;
            write_border(w, &widths)?;
        }
        for row in &self.rows {
            write_row(w, &widths, row)?;
        }
        if !self.rows.is_empty() {
            write_border(w, &widths)?;
        }
        Ok(())
    }
}
