//! Prompt construction from a generation request.

use copyforge_core::{CopyFormat, GenerationRequest};

/// Builds the single prompt for a request.
///
/// All request fields are embedded; the model is asked to produce the
/// requested number of variants as one numbered list in a single response.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut parts: Vec<String> = vec![
        "## 任务描述".to_string(),
        "你是一位专业的视频文案撰写专家。请根据以下要求生成视频文案：".to_string(),
        String::new(),
        "## 视频/平台信息".to_string(),
        format!("平台: {}", request.platform()),
        format!("形式: {}", request.format()),
        String::new(),
        "## 产品/服务描述".to_string(),
        request.brief().clone(),
        String::new(),
        "## 具体要求".to_string(),
        format!("1. 语气风格：{}", request.tone()),
        format!("2. 文案长度：{}", request.length()),
        format!("3. 目标受众：{}", request.audience()),
        String::new(),
        "## 输出要求".to_string(),
        "- 提供一个抓人开头（前5秒），给出3个要点，并以明确的CTA结尾。".to_string(),
    ];

    if *request.format() == CopyFormat::Caption {
        parts.push("- 输出简短有力的标题和若干话题标签。".to_string());
    }

    parts.push("- 保持贴合平台规范。".to_string());
    parts.push("- 要求每个时间段的字数在150-200字每分钟。".to_string());
    parts.push(format!(
        "- 请生成{}个不同版本的文案，使用编号列表（1. 2. 3.）分隔，每个版本独立完整。",
        request.variant_count()
    ));

    if *request.variant_count() > 1 {
        parts.push("- 确保各版本在结构和表达上有明显区别，但传达相同的信息和情感。".to_string());
    }

    parts.join("\n")
}
