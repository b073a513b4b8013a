//! Static compliance criteria: required headings and the Introduction
//! checklist. Ordered tables; list order defines report ordering.

/// Top-level headings a compliant dissertation must contain.
pub const REQUIRED_HEADINGS: &[&str] = &[
    "ANNOTATSIYA",
    "KIRISH",
    "ILMIY TADQIQOT ISHI MAVZUSI BO'YICHA ANALITIK TAHLIL",
    "UMUMIY XULOSA VA TAVSIYALAR",
    "FOYDANILGAN ADABIYOTLAR",
    "ILOVALAR",
    "XULOSA",
    "TEXNIKA VA TEXNOLOGIYALARNI TAKOMILLASHTIRISH MAQSADIDA O‘TKAZILGAN TADQIQOTLAR TAHLILI",
];

/// Marker that opens the Introduction section.
pub const INTRODUCTION_MARKER: &str = "KIRISH";

/// Heading whose presence gates the conclusion excerpt.
pub const CONCLUSION_HEADING: &str = "XULOSA";

/// Heading after which the conclusion excerpt is taken.
pub const GENERAL_CONCLUSION_HEADING: &str = "UMUMIY XULOSA VA TAVSIYALAR";

/// One sub-requirement of the Introduction section.
///
/// `min_words` is the recommended minimum length; it is reported but never
/// enforced as a pass/fail criterion. Any single keyword is sufficient for
/// the item to count as present.
pub struct ChecklistItem {
    pub id: u32,
    pub name: &'static str,
    pub min_words: u32,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

/// The 17 standard components of a dissertation Introduction.
pub const INTRODUCTION_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: 1,
        name: "Dissertatsiya mavzusining dolzarbligi va zarurati",
        min_words: 150,
        keywords: &["dolzarblig", "zarurati"],
        description: "Mavzuning dolzarbligi va tadqiqotga bo'lgan ehtiyoj asoslanadi.",
    },
    ChecklistItem {
        id: 2,
        name: "Tadqiqotning respublika fan va texnologiyalari rivojlanishining ustuvor yo'nalishlariga mosligi",
        min_words: 30,
        keywords: &["ustuvor yo'nalish", "mosligi"],
        description: "Tadqiqot qaysi ustuvor ilmiy yo'nalishga tegishli ekani ko'rsatiladi.",
    },
    ChecklistItem {
        id: 3,
        name: "Muammoning o'rganilganlik darajasi",
        min_words: 100,
        keywords: &["o'rganilganlik darajasi", "tadqiqotlar tahlili"],
        description: "Mavzu bo'yicha avval bajarilgan ishlar sharhi beriladi.",
    },
    ChecklistItem {
        id: 4,
        name: "Tadqiqotning ilmiy-tadqiqot ishlari rejalari bilan bog'liqligi",
        min_words: 20,
        keywords: &["rejalari bilan bog'liq", "ilmiy-tadqiqot ishlari rejalari"],
        description: "Dissertatsiya bajarilgan muassasa rejalari bilan aloqasi ko'rsatiladi.",
    },
    ChecklistItem {
        id: 5,
        name: "Tadqiqotning maqsadi",
        min_words: 30,
        keywords: &["tadqiqotning maqsadi", "ishning maqsadi"],
        description: "Tadqiqot oldiga qo'yilgan asosiy maqsad bayon etiladi.",
    },
    ChecklistItem {
        id: 6,
        name: "Tadqiqotning vazifalari",
        min_words: 50,
        keywords: &["tadqiqotning vazifalari", "vazifalari etib belgilandi"],
        description: "Maqsadga erishish uchun yechiladigan vazifalar sanab o'tiladi.",
    },
    ChecklistItem {
        id: 7,
        name: "Tadqiqotning obyekti",
        min_words: 15,
        keywords: &["tadqiqotning obyekti", "tadqiqot obyekti"],
        description: "Tadqiqot obyekti aniq ko'rsatiladi.",
    },
    ChecklistItem {
        id: 8,
        name: "Tadqiqotning predmeti",
        min_words: 15,
        keywords: &["tadqiqotning predmeti", "tadqiqot predmeti"],
        description: "Tadqiqot predmeti aniq ko'rsatiladi.",
    },
    ChecklistItem {
        id: 9,
        name: "Tadqiqotning usullari",
        min_words: 20,
        keywords: &["tadqiqotning usullari", "tadqiqot usullari", "metodlari"],
        description: "Qo'llanilgan ilmiy usullar keltiriladi.",
    },
    ChecklistItem {
        id: 10,
        name: "Tadqiqotning ilmiy yangiligi",
        min_words: 60,
        keywords: &["ilmiy yangiligi"],
        description: "Olingan yangi ilmiy natijalar bayon etiladi.",
    },
    ChecklistItem {
        id: 11,
        name: "Tadqiqotning amaliy natijalari",
        min_words: 40,
        keywords: &["amaliy natijalari", "amaliy natijasi"],
        description: "Amaliyotga tatbiq etiladigan natijalar ko'rsatiladi.",
    },
    ChecklistItem {
        id: 12,
        name: "Tadqiqot natijalarining ishonchliligi",
        min_words: 20,
        keywords: &["natijalarining ishonchliligi", "ishonchliligi"],
        description: "Natijalar ishonchliligini ta'minlagan omillar ko'rsatiladi.",
    },
    ChecklistItem {
        id: 13,
        name: "Tadqiqot natijalarining ilmiy va amaliy ahamiyati",
        min_words: 30,
        keywords: &["ilmiy ahamiyati", "amaliy ahamiyati"],
        description: "Natijalarning nazariy va amaliy qiymati asoslanadi.",
    },
    ChecklistItem {
        id: 14,
        name: "Tadqiqot natijalarining joriy qilinishi",
        min_words: 30,
        keywords: &["joriy qilinishi", "joriy etilishi"],
        description: "Natijalarning amaliyotga joriy etilgani hujjatlar bilan ko'rsatiladi.",
    },
    ChecklistItem {
        id: 15,
        name: "Tadqiqot natijalarining aprobatsiyasi",
        min_words: 20,
        keywords: &["aprobatsiyasi", "sinovdan o'tkazil"],
        description: "Natijalar muhokama etilgan anjumanlar sanab o'tiladi.",
    },
    ChecklistItem {
        id: 16,
        name: "Tadqiqot natijalarining e'lon qilinganligi",
        min_words: 20,
        keywords: &["e'lon qilinganligi", "maqolalar chop etilgan"],
        description: "Mavzu bo'yicha chop etilgan ishlar soni ko'rsatiladi.",
    },
    ChecklistItem {
        id: 17,
        name: "Dissertatsiyaning tuzilishi va hajmi",
        min_words: 20,
        keywords: &["tuzilishi va hajmi", "dissertatsiyaning tuzilishi"],
        description: "Ishning tarkibiy qismlari va umumiy hajmi bayon etiladi.",
    },
];
