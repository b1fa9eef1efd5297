//! ローカライズ表（UI 文字列・入力例・名言）

use super::language::Language;

/// UI 文字列一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub start_btn: &'static str,
    pub examples_title: &'static str,
    pub loading_steps: [&'static str; 4],
    pub new_challenge: &'static str,
    pub copy_all: &'static str,
    pub copy_all_short: &'static str,
    pub detected_challenge: &'static str,
    pub used_technique: &'static str,
    pub category: &'static str,
    pub all: &'static str,
    pub favorites: &'static str,
    pub impact: &'static str,
    pub feasibility: &'static str,
    pub next_step: &'static str,
    pub copy_success: &'static str,
    pub copy_all_success: &'static str,
    pub error: &'static str,
    pub input_error: &'static str,
    /// 解析中に届いた入力を断るときの文
    pub busy: &'static str,
    pub footer_text: &'static str,
    pub switch_language: &'static str,
    /// 1件コピー時の見出し
    pub export_header: &'static str,
}

/// 入力例（クリックでそのまま送信される）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub text: &'static str,
    pub icon: &'static str,
}

/// ローディング中に表示する名言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const AR: Strings = Strings {
    title: "مختبر الإبداع",
    subtitle: "منصة حل المشكلات الذكية",
    placeholder: "اكتب التحدي الذي يواجهك هنا... (مثال: كيف يمكننا تقليل هدر الطعام في المطعم؟)",
    start_btn: "ابدأ رحلة الابتكار",
    examples_title: "أمثلة ملهمة:",
    loading_steps: [
        "تفكيك التحدي...",
        "اختيار المنهجية...",
        "تفكير إبداعي...",
        "خطة التنفيذ...",
    ],
    new_challenge: "تحدي جديد",
    copy_all: "نسخ جميع الحلول",
    copy_all_short: "نسخ الكل",
    detected_challenge: "التحدي المكتشف",
    used_technique: "المنهجية المستخدمة",
    category: "التصنيف:",
    all: "الكل",
    favorites: "المفضلة",
    impact: "الأثر",
    feasibility: "الجدوى",
    next_step: "الخطوة القادمة",
    copy_success: "تم نسخ الحل بنجاح",
    copy_all_success: "تم نسخ جميع الحلول",
    error: "عذراً، حدث خطأ ما في التحليل. حاول مرة أخرى",
    input_error: "يرجى كتابة التحدي أولاً",
    busy: "التحليل جارٍ، يرجى الانتظار",
    footer_text: "صنع بكل ❤️ لمجتمع المبدعين",
    switch_language: "English",
    export_header: "حل مقترح من مختبر الإبداع",
};

const EN: Strings = Strings {
    title: "Innovation Lab",
    subtitle: "Smart Problem Solving Platform",
    placeholder: "Type your challenge here... (e.g., How can we reduce food waste in the restaurant?)",
    start_btn: "Start Innovation Journey",
    examples_title: "Inspiring Examples:",
    loading_steps: [
        "Deconstructing challenge...",
        "Selecting methodology...",
        "Creative thinking...",
        "Execution plan...",
    ],
    new_challenge: "New Challenge",
    copy_all: "Copy All Solutions",
    copy_all_short: "Copy All",
    detected_challenge: "Detected Challenge",
    used_technique: "Methodology Used",
    category: "Category:",
    all: "All",
    favorites: "Favorites",
    impact: "Impact",
    feasibility: "Feasibility",
    next_step: "Next Step",
    copy_success: "Solution copied successfully",
    copy_all_success: "All solutions copied",
    error: "Sorry, an error occurred during analysis. Please try again",
    input_error: "Please enter a challenge first",
    busy: "Analysis in progress, please wait",
    footer_text: "Made with ❤️ for the creative community",
    switch_language: "العربية",
    export_header: "Suggested solution from Innovation Lab",
};

const EXAMPLES_AR: [Example; 4] = [
    Example { text: "تحسين إنتاجية الفريق", icon: "⏰" },
    Example { text: "إعادة تنظيم المساحات", icon: "🏢" },
    Example { text: "آلية ملاحظات العملاء", icon: "💬" },
    Example { text: "تقليل فاقد الاجتماعات", icon: "📅" },
];

const EXAMPLES_EN: [Example; 4] = [
    Example { text: "Improve team productivity", icon: "⏰" },
    Example { text: "Reorganizing spaces", icon: "🏢" },
    Example { text: "Customer feedback mechanism", icon: "💬" },
    Example { text: "Reducing meeting waste", icon: "📅" },
];

const QUOTES_AR: [Quote; 7] = [
    Quote { text: "الإبداع هو الذكاء وهو يمرح.", author: "ألبرت أينشتاين" },
    Quote { text: "الابتكار هو ما يميز القائد عن التابع.", author: "ستيف جوبز" },
    Quote { text: "لا يمكنك استنزاف الإبداع، فكلما استخدمته أكثر، زاد لديك.", author: "مايا أنجيلو" },
    Quote { text: "الخيال أكثر أهمية من المعرفة.", author: "ألبرت أينشتاين" },
    Quote { text: "أفضل طريقة للتنبؤ بالمستقبل هي ابتكاره.", author: "بيتر دراكر" },
    Quote { text: "الابتكار هو القدرة على رؤية التغيير كفرصة وليس كتهديد.", author: "ستيف جوبز" },
    Quote { text: "الإبداع يتطلب الشجاعة للتخلي عن اليقين.", author: "إريك فروم" },
];

const QUOTES_EN: [Quote; 7] = [
    Quote { text: "Creativity is intelligence having fun.", author: "Albert Einstein" },
    Quote { text: "Innovation distinguishes between a leader and a follower.", author: "Steve Jobs" },
    Quote { text: "You can't use up creativity. The more you use, the more you have.", author: "Maya Angelou" },
    Quote { text: "Imagination is more important than knowledge.", author: "Albert Einstein" },
    Quote { text: "The best way to predict the future is to create it.", author: "Peter Drucker" },
    Quote { text: "Innovation is the ability to see change as an opportunity - not a threat.", author: "Steve Jobs" },
    Quote { text: "Creativity requires the courage to let go of certainties.", author: "Erich Fromm" },
];

pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::Ar => &AR,
        Language::En => &EN,
    }
}

pub fn examples(lang: Language) -> &'static [Example] {
    match lang {
        Language::Ar => &EXAMPLES_AR,
        Language::En => &EXAMPLES_EN,
    }
}

pub fn quotes(lang: Language) -> &'static [Quote] {
    match lang {
        Language::Ar => &QUOTES_AR,
        Language::En => &QUOTES_EN,
    }
}
