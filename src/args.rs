// src/args.rs
use crate::options::OutputFormat;
use clap::{Args as ClapArgs, Parser};

#[derive(Parser, Debug)]
#[command(name = "chars_counter", version, about = "文字集合の出現回数カウントツール")]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub range: RangeOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// 詳細ログを出力 (DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// 検索対象の文字列
    #[arg(long, help_heading = "入力")]
    pub text: Option<String>,

    /// 検索する文字の集合（各文字を1要素として扱い、重複も数える）
    #[arg(long, help_heading = "入力")]
    pub chars: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct RangeOptions {
    /// 検索開始位置（0始まり、文字単位、両端を含む）
    #[arg(long, requires = "end", allow_negative_numbers = true, help_heading = "範囲")]
    pub start: Option<isize>,

    /// 検索終了位置（0始まり、文字単位、両端を含む）
    #[arg(long, requires = "start", allow_negative_numbers = true, help_heading = "範囲")]
    pub end: Option<isize>,

    /// 一致件数の上限（0 は上限なし）
    #[arg(long, requires = "start", allow_negative_numbers = true, help_heading = "範囲")]
    pub limit: Option<isize>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,
}

impl Args {
    /// Character set as entered, one entry per `char`, duplicates kept.
    pub fn char_set(&self) -> Option<Vec<char>> {
        self.input.chars.as_deref().map(|s| s.chars().collect())
    }
}
