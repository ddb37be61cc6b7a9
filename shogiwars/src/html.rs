//! HTML 字符串辅助函数
//!
//! 只针对对局历史页面的结构，不是通用的 HTML 解析器。
//! 标签名与属性名按 ASCII 不区分大小写匹配。

use std::sync::LazyLock;

use regex::Regex;

/// 开始标签：`<tag attrs>` 或 `<tag attrs/>`
static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)\b([^>]*)>").unwrap());

/// 开始或结束标签，用于配对
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").unwrap());

/// 属性：双引号、单引号或无引号的值
static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

/// 无结束标签的元素
const VOID_TAGS: [&str; 8] = ["area", "br", "hr", "img", "input", "link", "meta", "source"];

/// 文档中的一个元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    /// 小写前的原始标签名
    pub tag: &'a str,
    /// 开始标签内的属性部分
    pub attrs: &'a str,
    /// 开始标签与结束标签之间的内容
    pub inner: &'a str,
}

impl<'a> Element<'a> {
    /// class 属性中的全部类名
    pub fn classes(&self) -> Vec<&'a str> {
        attr(self.attrs, "class")
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| *c == class)
    }

    /// 属性值
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        attr(self.attrs, name)
    }

    /// 去掉标签并规整空白后的文本
    pub fn text(&self) -> String {
        normalize_ws(&normalize_entities(&strip_tags(self.inner)))
    }

    /// 后代元素中带有指定 class 的元素
    pub fn find_class(&self, class: &str) -> Vec<Element<'a>> {
        find_by_class(self.inner, class)
    }

    /// 后代元素中指定标签名的元素
    pub fn find_tag(&self, tag: &str) -> Vec<Element<'a>> {
        find_by_tag(self.inner, tag)
    }
}

/// 读取属性值，支持双引号、单引号和无引号
pub fn attr<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let caps = ATTR
        .captures_iter(attrs)
        .find(|caps| caps.get(1).is_some_and(|m| m.as_str().eq_ignore_ascii_case(name)))?;
    caps.get(2)
        .or_else(|| caps.get(3))
        .or_else(|| caps.get(4))
        .map(|m| m.as_str())
}

/// 查找所有 class 中包含指定类名的元素（按出现顺序，包括嵌套元素）
pub fn find_by_class<'a>(doc: &'a str, class: &str) -> Vec<Element<'a>> {
    find_elements(doc, |_, attrs| {
        attr(attrs, "class").is_some_and(|v| v.split_whitespace().any(|c| c == class))
    })
}

/// 查找所有指定标签名的元素
pub fn find_by_tag<'a>(doc: &'a str, tag: &str) -> Vec<Element<'a>> {
    find_elements(doc, |t, _| t.eq_ignore_ascii_case(tag))
}

fn find_elements<'a>(doc: &'a str, pred: impl Fn(&str, &str) -> bool) -> Vec<Element<'a>> {
    let mut out = Vec::new();
    for caps in OPEN_TAG.captures_iter(doc) {
        let (Some(whole), Some(tag), Some(attrs)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if !pred(tag.as_str(), attrs.as_str()) {
            continue;
        }
        let self_closing = attrs.as_str().trim_end().ends_with('/');
        let is_void = VOID_TAGS.iter().any(|v| v.eq_ignore_ascii_case(tag.as_str()));
        let inner = if self_closing || is_void {
            ""
        } else {
            let rest = &doc[whole.end()..];
            let end = matching_close(rest, tag.as_str()).unwrap_or(rest.len());
            &rest[..end]
        };
        out.push(Element {
            tag: tag.as_str(),
            attrs: attrs.as_str(),
            inner,
        });
    }
    out
}

/// 在 `rest`（开始标签之后的内容）中找到匹配的结束标签位置，处理同名嵌套
fn matching_close(rest: &str, tag: &str) -> Option<usize> {
    let mut depth = 0usize;
    for caps in ANY_TAG.captures_iter(rest) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        if !name.as_str().eq_ignore_ascii_case(tag) {
            continue;
        }
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        if closing {
            if depth == 0 {
                return Some(whole.start());
            }
            depth -= 1;
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }
    None
}

/// 去掉所有标签 `<...>`，然后规整空白
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// 简单的实体解码
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// 连续空白合并为一个空格并去掉首尾空白
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
