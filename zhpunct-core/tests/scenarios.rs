//! End-to-end normalization scenarios
//!
//! Cases are grouped by the punctuation mark or rule they exercise.

use zhpunct_core::normalize;

fn check(cases: &[(&str, &str)]) {
    for (i, (input, expected)) in cases.iter().enumerate() {
        let output = normalize(input);
        assert_eq!(&output, expected, "case {} failed for input {:?}", i + 1, input);
    }
}

#[test]
fn test_comma() {
    check(&[
        ("你好，世界", "你好, 世界"),
        ("第一，第二，第三", "第一, 第二, 第三"),
        ("末尾逗号，下一句", "末尾逗号, 下一句"),
    ]);
}

#[test]
fn test_whitespace_around_converted_punctuation() {
    check(&[
        ("中，   文", "中, 文"),
        ("你好 ，  世界", "你好, 世界"),
        ("注意 ：  内容", "注意: 内容"),
        ("结束。　下一句", "结束. 下一句"),
        ("Python，  中文", "Python, 中文"),
    ]);
}

#[test]
fn test_enumeration_comma() {
    check(&[
        ("苹果、香蕉、橙子", "苹果, 香蕉, 橙子"),
        ("一、二、三", "一, 二, 三"),
        ("末尾顿号、下一句", "末尾顿号, 下一句"),
    ]);
}

#[test]
fn test_full_stop() {
    check(&[
        ("这是一句话。下一句", "这是一句话. 下一句"),
        ("第一句。第二句。下一句", "第一句. 第二句. 下一句"),
        ("多个句号。。。下一句", "多个句号... 下一句"),
    ]);
}

#[test]
fn test_colon_and_semicolon() {
    check(&[
        ("标题：内容", "标题: 内容"),
        ("时间：下午三点", "时间: 下午三点"),
        ("末尾冒号：下一句", "末尾冒号: 下一句"),
        ("第一部分；第二部分", "第一部分; 第二部分"),
        ("A组；B组；C组", "A 组; B 组; C 组"),
        ("末尾分号；下一句", "末尾分号; 下一句"),
    ]);
}

#[test]
fn test_question_and_exclamation() {
    check(&[
        ("你好吗？下一句", "你好吗? 下一句"),
        ("什么？为什么？下一句", "什么? 为什么? 下一句"),
        ("连续问号？？？下一句", "连续问号??? 下一句"),
        ("太好了！下一句", "太好了! 下一句"),
        ("哇！真的！下一句", "哇! 真的! 下一句"),
        ("连续感叹！！！下一句", "连续感叹!!! 下一句"),
    ]);
}

#[test]
fn test_parentheses() {
    check(&[
        ("这是（括号内容）", "这是 (括号内容)"),
        ("（开头括号）内容", "(开头括号) 内容"),
        ("多个（第一个）和（第二个）", "多个 (第一个) 和 (第二个)"),
        ("末尾括号（）下一句", "末尾括号 () 下一句"),
        ("（内容），后面是逗号", "(内容), 后面是逗号"),
        ("（内容）。后面是句号", "(内容). 后面是句号"),
    ]);
}

#[test]
fn test_double_quotes() {
    check(&[
        ("他说 \"你好\"", "他说 \"你好\""),
        ("\"引用内容\"", "\"引用内容\""),
        ("多个 \"第一个\" 和 \"第二个\" ", "多个 \"第一个\" 和 \"第二个\""),
        ("\"内容\" 结束", "\"内容\" 结束"),
        ("\"内容\"，后面是逗号", "\"内容\", 后面是逗号"),
        ("\"内容\"。后面是句号", "\"内容\". 后面是句号"),
        ("\"末尾引号\" 下一句", "\"末尾引号\" 下一句"),
    ]);
}

#[test]
fn test_chinese_english_spacing() {
    check(&[
        ("中文Eng中文", "中文 Eng 中文"),
        ("这是Python代码，它使用Flask框架。", "这是 Python 代码, 它使用 Flask 框架."),
        ("中文Hello World中文", "中文 Hello World 中文"),
        ("Python是一种编程语言", "Python 是一种编程语言"),
        ("价格是100元", "价格是 100 元"),
        ("Python3是最新版本", "Python3 是最新版本"),
        ("使用Python3和Flask2框架", "使用 Python3 和 Flask2 框架"),
        ("版本3.11已发布", "版本 3.11 已发布"),
    ]);
}

#[test]
fn test_combined_rules() {
    check(&[
        (
            "\"Python\"是一种编程语言，它很流行。下一句",
            "\"Python\" 是一种编程语言, 它很流行. 下一句",
        ),
        (
            "这是第一个、第二个、第三个（注意括号）！下一句",
            "这是第一个, 第二个, 第三个 (注意括号)! 下一句",
        ),
        ("价格：100元；数量：5个。下一句", "价格: 100 元; 数量: 5 个. 下一句"),
        ("**参考资料：**", "**参考资料:**"),
        ("从\"A\"到\"B\"只需1天。", "从 \"A\" 到 \"B\" 只需 1 天."),
        ("注意：**这很着急，也很重要。**", "注意: **这很着急, 也很重要.**"),
    ]);
}

#[test]
fn test_reference_scenarios() {
    check(&[
        ("连续感叹！！！下一句", "连续感叹!!! 下一句"),
        ("从\"A\"到\"B\"只需1天。", "从 \"A\" 到 \"B\" 只需 1 天."),
        ("注意：**这很着急，也很重要。**", "注意: **这很着急, 也很重要.**"),
        ("\"Python\"是", "\"Python\" 是"),
        ("**参考资源：**", "**参考资源:**"),
    ]);
}

#[test]
fn test_multiline_text() {
    let input = "第一段，使用Rust。\n\n第二段：**重点：** 结束\r\n第三行  ";
    let expected = "第一段, 使用 Rust.\n\n第二段: **重点:** 结束\r\n第三行";
    assert_eq!(normalize(input), expected);
}

#[test]
fn test_text_without_chinese_is_untouched() {
    check(&[
        ("Hello, world. This is fine!", "Hello, world. This is fine!"),
        ("v1.0 at 12:30, a,b", "v1.0 at 12:30, a,b"),
        ("wait... really?!", "wait... really?!"),
        ("f(x) = [1, 2]", "f(x) = [1, 2]"),
    ]);
}

#[test]
fn test_other_scripts_get_no_spacing() {
    check(&[
        ("日本語のテストabc", "日本語のテストabc"),
        ("表情😀abc", "表情😀abc"),
        ("书名《三体》很好", "书名《三体》很好"),
    ]);
}
