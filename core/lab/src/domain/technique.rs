//! 手法カタログ（創造的問題解決の方法論、静的データ）
//!
//! 識別子から二言語の表示情報（名前・説明・アイコン）を引く。振る舞いは持たない。

use super::language::Language;

/// 手法の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TechniqueId {
    Scamper,
    SixHats,
    FirstPrinciples,
    ReverseBrainstorming,
    Triz,
    Swot,
    Disney,
    Lateral,
    BlueOcean,
    AttributeListing,
    LotusBlossom,
    Stem,
    ConceptMapping,
    MorphologicalAnalysis,
    Brainwriting,
    MindMapping,
    Reframing,
    RandomWord,
    FiveWhys,
    Fishbone,
    Simplification,
}

impl TechniqueId {
    pub const ALL: [TechniqueId; 21] = [
        TechniqueId::Scamper,
        TechniqueId::SixHats,
        TechniqueId::FirstPrinciples,
        TechniqueId::ReverseBrainstorming,
        TechniqueId::Triz,
        TechniqueId::Swot,
        TechniqueId::Disney,
        TechniqueId::Lateral,
        TechniqueId::BlueOcean,
        TechniqueId::AttributeListing,
        TechniqueId::LotusBlossom,
        TechniqueId::Stem,
        TechniqueId::ConceptMapping,
        TechniqueId::MorphologicalAnalysis,
        TechniqueId::Brainwriting,
        TechniqueId::MindMapping,
        TechniqueId::Reframing,
        TechniqueId::RandomWord,
        TechniqueId::FiveWhys,
        TechniqueId::Fishbone,
        TechniqueId::Simplification,
    ];

    /// モデルとの受け渡しに使う識別子（例: "FIVE_WHYS"）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scamper => "SCAMPER",
            Self::SixHats => "SIX_HATS",
            Self::FirstPrinciples => "FIRST_PRINCIPLES",
            Self::ReverseBrainstorming => "REVERSE_BRAINSTORMING",
            Self::Triz => "TRIZ",
            Self::Swot => "SWOT",
            Self::Disney => "DISNEY",
            Self::Lateral => "LATERAL",
            Self::BlueOcean => "BLUE_OCEAN",
            Self::AttributeListing => "ATTRIBUTE_LISTING",
            Self::LotusBlossom => "LOTUS_BLOSSOM",
            Self::Stem => "STEM",
            Self::ConceptMapping => "CONCEPT_MAPPING",
            Self::MorphologicalAnalysis => "MORPHOLOGICAL_ANALYSIS",
            Self::Brainwriting => "BRAINWRITING",
            Self::MindMapping => "MIND_MAPPING",
            Self::Reframing => "REFRAMING",
            Self::RandomWord => "RANDOM_WORD",
            Self::FiveWhys => "FIVE_WHYS",
            Self::Fishbone => "FISHBONE",
            Self::Simplification => "SIMPLIFICATION",
        }
    }

    /// 識別子を解析する（前後空白を除き、大文字小文字を区別しない）
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|id| id.as_str() == wanted)
    }
}

impl std::fmt::Display for TechniqueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 手法1件の表示情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technique {
    pub id: TechniqueId,
    pub name: &'static str,
    pub name_en: &'static str,
    pub description: &'static str,
    pub description_en: &'static str,
    pub icon: &'static str,
}

/// 返ってきた識別子がカタログに無いときに使う手法
pub const FALLBACK_TECHNIQUE: TechniqueId = TechniqueId::FiveWhys;

/// 識別子の解決結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub technique: &'static Technique,
    /// false のときは FALLBACK_TECHNIQUE に置き換えた
    pub matched: bool,
}

impl Technique {
    /// カタログから引く
    pub fn get(id: TechniqueId) -> &'static Technique {
        // CATALOG は TechniqueId::ALL と同じ並び
        &CATALOG[id as usize]
    }

    /// モデルが返した生の識別子を解決する。未知なら FALLBACK_TECHNIQUE。
    pub fn resolve(raw: &str) -> Resolution {
        match TechniqueId::parse(raw) {
            Some(id) => Resolution {
                technique: Self::get(id),
                matched: true,
            },
            None => Resolution {
                technique: Self::get(FALLBACK_TECHNIQUE),
                matched: false,
            },
        }
    }

    pub fn all() -> &'static [Technique] {
        &CATALOG
    }

    pub fn display_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ar => self.name,
            Language::En => self.name_en,
        }
    }

    pub fn display_description(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ar => self.description,
            Language::En => self.description_en,
        }
    }
}

static CATALOG: [Technique; 21] = [
    Technique {
        id: TechniqueId::Scamper,
        name: "سكامبر (SCAMPER)",
        name_en: "SCAMPER",
        description: "تطوير الأفكار من خلال الاستبدال، الدمج، التكيف، التعديل، الاستخدام لغرض آخر، الحذف، والقلب.",
        description_en: "Develop ideas through Substitution, Combination, Adaptation, Modification, Put to another use, Elimination, and Reverse.",
        icon: "🚀",
    },
    Technique {
        id: TechniqueId::SixHats,
        name: "القبعات الست للتفكير",
        name_en: "Six Thinking Hats",
        description: "تحليل المشكلة من 6 زوايا مختلفة (الحقائق، المشاعر، المخاطر، الفوائد، الإبداع، والإدارة).",
        description_en: "Analyze the problem from 6 different perspectives (Facts, Feelings, Risks, Benefits, Creativity, and Management).",
        icon: "🎩",
    },
    Technique {
        id: TechniqueId::FirstPrinciples,
        name: "التفكير بالمبادئ الأولية",
        name_en: "First Principles Thinking",
        description: "تفكيك المشكلة إلى حقائقها الأساسية وإعادة بنائها من الصفر.",
        description_en: "Deconstruct the problem into its fundamental truths and rebuild it from scratch.",
        icon: "🧱",
    },
    Technique {
        id: TechniqueId::ReverseBrainstorming,
        name: "العصف الذهني العكسي",
        name_en: "Reverse Brainstorming",
        description: "البحث عن طرق لـ \"إحداث\" المشكلة بدلاً من حلها، ثم عكس تلك الطرق للوصول للحل.",
        description_en: "Look for ways to \"cause\" the problem instead of solving it, then reverse those ways to reach a solution.",
        icon: "🔄",
    },
    Technique {
        id: TechniqueId::Triz,
        name: "نظرية تريز (TRIZ)",
        name_en: "TRIZ Theory",
        description: "حل المشكلات الابتكارية بناءً على الأنماط التقنية والتناقضات المادية.",
        description_en: "Solve innovative problems based on technical patterns and physical contradictions.",
        icon: "⚙️",
    },
    Technique {
        id: TechniqueId::Swot,
        name: "تحليل سوات (SWOT)",
        name_en: "SWOT Analysis",
        description: "تحليل نقاط القوة، الضعف، الفرص، والتهديدات المحيطة بالتحدي.",
        description_en: "Analyze Strengths, Weaknesses, Opportunities, and Threats surrounding the challenge.",
        icon: "📊",
    },
    Technique {
        id: TechniqueId::Disney,
        name: "طريقة ديزني الإبداعية",
        name_en: "Disney Creative Method",
        description: "تقسيم التفكير إلى ثلاث مراحل: الحالم (الأفكار)، الواقعي (التنفيذ)، والناقد (الثغرات).",
        description_en: "Divide thinking into three stages: The Dreamer (Ideas), The Realist (Execution), and The Critic (Gaps).",
        icon: "🏰",
    },
    Technique {
        id: TechniqueId::Lateral,
        name: "التفكير الجانبي (ديبونو)",
        name_en: "Lateral Thinking (De Bono)",
        description: "استخدام أساليب \"الاستفزاز\" والكلمات العشوائية لفتح مسارات تفكير غير متوقعة.",
        description_en: "Use \"provocation\" methods and random words to open unexpected thinking paths.",
        icon: "⚡",
    },
    Technique {
        id: TechniqueId::BlueOcean,
        name: "استراتيجية المحيط الأزرق",
        name_en: "Blue Ocean Strategy",
        description: "التركيز على خلق مساحة سوقية جديدة وخالية من المنافسة بدلاً من الصراع في المحيطات الحمراء.",
        description_en: "Focus on creating a new, competition-free market space instead of fighting in red oceans.",
        icon: "🌊",
    },
    Technique {
        id: TechniqueId::AttributeListing,
        name: "قائمة السمات والخصائص",
        name_en: "Attribute Listing",
        description: "تفكيك المنتج أو المشكلة إلى أجزاء صغيرة جداً وتحسين كل جزء على حدة.",
        description_en: "Deconstruct the product or problem into very small parts and improve each part individually.",
        icon: "🔍",
    },
    Technique {
        id: TechniqueId::LotusBlossom,
        name: "تفتح اللوتس (Lotus Blossom)",
        name_en: "Lotus Blossom",
        description: "تقنية يابانية للتوسع في فكرة مركزية وتوليد 8 أفكار فرعية لكل فكرة من الأفكار الثمانية الأساسية.",
        description_en: "A Japanese technique for expanding on a central idea and generating 8 sub-ideas for each of the 8 core ideas.",
        icon: "🪷",
    },
    Technique {
        id: TechniqueId::Stem,
        name: "تفكير ستيم (STEM)",
        name_en: "STEM Thinking",
        description: "تطبيق منهجية العلوم والتكنولوجيا والهندسة والرياضيات لحل المشكلات التقنية والهيكلية.",
        description_en: "Apply Science, Technology, Engineering, and Mathematics methodology to solve technical and structural problems.",
        icon: "🧬",
    },
    Technique {
        id: TechniqueId::ConceptMapping,
        name: "خريطة المفاهيم",
        name_en: "Concept Mapping",
        description: "ربط الأفكار ببعضها بصرياً لاكتشاف علاقات خفية بين المكونات المختلفة للمشكلة.",
        description_en: "Visually connect ideas to discover hidden relationships between different components of the problem.",
        icon: "🗺️",
    },
    Technique {
        id: TechniqueId::MorphologicalAnalysis,
        name: "التحليل المورفولوجي",
        name_en: "Morphological Analysis",
        description: "استكشاف كافة الاحتمالات عبر تفكيك المشكلة إلى أبعادها وتجربة تركيبات جديدة.",
        description_en: "Explore all possibilities by deconstructing the problem into its dimensions and trying new combinations.",
        icon: "🧩",
    },
    Technique {
        id: TechniqueId::Brainwriting,
        name: "الكتابة الذهنية (Brainwriting)",
        name_en: "Brainwriting",
        description: "توليد أفكار مكثفة عبر الكتابة التدويرية لتجنب سيطرة رأي واحد وتحفيز الجميع.",
        description_en: "Generate intensive ideas through circular writing to avoid one-person dominance and stimulate everyone.",
        icon: "📝",
    },
    Technique {
        id: TechniqueId::MindMapping,
        name: "الخرائط الذهنية",
        name_en: "Mind Mapping",
        description: "تمثيل مرئي للمشكلة يسهل فهم العلاقات المعقدة واكتشاف ثغرات التفكير.",
        description_en: "A visual representation of the problem that facilitates understanding complex relationships and discovering thinking gaps.",
        icon: "🧠",
    },
    Technique {
        id: TechniqueId::Reframing,
        name: "مصفوفة إعادة التأطير",
        name_en: "Reframing Matrix",
        description: "النظر للمشكلة من وجهات نظر مختلفة تماماً (قانونية، تسويقية، تقنية) لتغيير تعريف التحدي.",
        description_en: "Look at the problem from completely different perspectives (legal, marketing, technical) to change the definition of the challenge.",
        icon: "🖼️",
    },
    Technique {
        id: TechniqueId::RandomWord,
        name: "الربط العشوائي",
        name_en: "Random Word Association",
        description: "كسر الجمود الفكري عبر ربط المشكلة بكلمة أو صورة عشوائية تماماً لتوليد شرارة إبداعية.",
        description_en: "Break mental stagnation by linking the problem to a completely random word or image to generate a creative spark.",
        icon: "🎲",
    },
    Technique {
        id: TechniqueId::FiveWhys,
        name: "الأسئلة الخمسة (لماذا؟)",
        name_en: "Five Whys",
        description: "التعمق في جذور المشكلة للوصول إلى السبب الحقيقي الكامن وراء العوارض الظاهرية.",
        description_en: "Delve into the roots of the problem to reach the true cause underlying the apparent symptoms.",
        icon: "❓",
    },
    Technique {
        id: TechniqueId::Fishbone,
        name: "مخطط عظمة السمكة",
        name_en: "Fishbone Diagram",
        description: "تصنيف مسببات المشكلة إلى فئات (البشر، العمليات، البيئة) لتحديد مكان الخلل بدقة.",
        description_en: "Categorize the causes of the problem into categories (People, Processes, Environment) to accurately identify the flaw.",
        icon: "🐟",
    },
    Technique {
        id: TechniqueId::Simplification,
        name: "مبدأ التبسيط الأقصى",
        name_en: "Maximum Simplification",
        description: "البحث عن الحل الأبسط عبر إزالة كل ما هو غير ضروري حتى يتبقى جوهر الفكرة فقط.",
        description_en: "Search for the simplest solution by removing everything unnecessary until only the essence of the idea remains.",
        icon: "✂️",
    },
];
