//! 対話入力
//!
//! パーサーやセッションは `Prompter` 越しにだけユーザーへ問い合わせる。
//! テストでは台本どおりに答える実装を差し込む。

use crate::error::Result;
use dialoguer::{Input, Select};

pub trait Prompter {
    /// 選択肢から1つ選ばせて、その添字を返す
    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Result<usize>;

    fn ask_text(&mut self, prompt: &str) -> Result<String>;

    /// 整数が入力されるまで聞き直す
    fn ask_number(&mut self, prompt: &str) -> Result<u32>;
}

/// 端末用
#[derive(Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        let index = Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn ask_text(&mut self, prompt: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(input.trim().to_string())
    }

    fn ask_number(&mut self, prompt: &str) -> Result<u32> {
        // 数値に変換できない入力はdialoguerが聞き直す
        let number: u32 = Input::new().with_prompt(prompt).interact_text()?;
        Ok(number)
    }
}
