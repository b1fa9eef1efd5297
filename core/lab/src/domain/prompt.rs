//! ソルバーに送るプロンプトと応答スキーマ

use super::language::Language;
use super::problem::ProblemText;
use super::technique::Technique;
use serde_json::{json, Value};

/// 応答に含める解決案の数（プロンプトで要求するだけで、件数は検証しない）
pub const REQUESTED_SOLUTIONS: usize = 5;

/// 既定の思考予算（速度と手法選択の精度の折り合い）
pub const DEFAULT_THINKING_BUDGET: u32 = 4000;

/// カタログ全件を `- [ID] name: description` の行にする
pub fn technique_details(lang: Language) -> String {
    Technique::all()
        .iter()
        .map(|t| {
            format!(
                "- [{}] {}: {}",
                t.id,
                t.display_name(lang),
                t.display_description(lang)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn instruction(problem: &str, lang: Language) -> String {
    let details = technique_details(lang);
    match lang {
        Language::Ar => format!(
            "بصفتك \"كبير استراتيجيي الابتكار\" في مختبر الإبداع، مهمتك هي تحليل التحدي واختيار الأداة الذهنية الأكثر كفاءة لحله.\n\
التحدي المطروح: \"{problem}\"\n\
مكتبة المنهجيات المتاحة وسياق استخدامها:\n\
{details}\n\
المطلوب بدقة:\n\
1. قم بمطابقة التحدي مع المنهجية التي تمنح \"أقصى قوة دفع إبداعية\" بناءً على طبيعته.\n\
2. اشرح بذكاء واختصار (في حدود 25 كلمة) لماذا هذه المنهجية تحديداً ستفكك هذا التحدي أفضل من غيرها.\n\
3. قدم {n} حلول ابتكارية \"نوعية\" (تجنب البديهيات) مستوحاة من روح المنهجية المختارة.\n\
4. لكل حل: حدد الأثر (1-10)، الجدوى (1-10)، والخطوة الأولى التنفيذية.\n\
يجب أن يكون الرد باللغة العربية.",
            n = REQUESTED_SOLUTIONS
        ),
        Language::En => format!(
            "As a \"Chief Innovation Strategist\" at the Innovation Lab, your task is to analyze the challenge and select the most efficient mental tool to solve it.\n\
Challenge: \"{problem}\"\n\
Available methodologies and context:\n\
{details}\n\
Requirements:\n\
1. Match the challenge with the methodology that gives \"maximum creative momentum\" based on its nature.\n\
2. Explain intelligently and concisely (within 25 words) why this specific methodology will deconstruct this challenge better than others.\n\
3. Provide {n} \"qualitative\" innovative solutions (avoid clichés) inspired by the spirit of the chosen methodology.\n\
4. For each solution: specify Impact (1-10), Feasibility (1-10), and the first executive step.\n\
The response must be in English.",
            n = REQUESTED_SOLUTIONS
        ),
    }
}

const OUTPUT_TEMPLATE: &str = r#"Return ONLY JSON:
{
  "techniqueId": "Chosen Methodology ID",
  "analysis": "Brief analysis linking problem nature to methodology strength",
  "solutions": [
    {
      "title": "Innovative Title",
      "text": "Solution description and how it works",
      "emoji": "Emoji",
      "category": "Solution Category",
      "impact": 1-10,
      "feasibility": 1-10,
      "nextStep": "Immediate practical step"
    }
  ]
}"#;

/// 課題文・言語からプロンプト全文を組み立てる
pub fn build_prompt(problem: &ProblemText, lang: Language) -> String {
    format!("{}\n\n{}", instruction(problem, lang), OUTPUT_TEMPLATE)
}

/// 構造化出力のスキーマ（Gemini の OpenAPI サブセット表記）
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "techniqueId": { "type": "STRING" },
            "analysis": { "type": "STRING" },
            "solutions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "text": { "type": "STRING" },
                        "emoji": { "type": "STRING" },
                        "category": { "type": "STRING" },
                        "impact": { "type": "NUMBER" },
                        "feasibility": { "type": "NUMBER" },
                        "nextStep": { "type": "STRING" }
                    },
                    "required": ["title", "text", "emoji", "category", "impact", "feasibility", "nextStep"]
                }
            }
        },
        "required": ["techniqueId", "analysis", "solutions"]
    })
}
