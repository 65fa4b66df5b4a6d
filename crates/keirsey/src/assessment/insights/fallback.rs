use super::super::domain::{Language, Temperament};

/// Static narrative used when no insight provider is available or it fails.
pub(crate) struct FallbackEntry {
    pub(crate) strengths: [&'static str; 5],
    pub(crate) weaknesses: [&'static str; 5],
    pub(crate) careers: [&'static str; 5],
    pub(crate) dos: [&'static str; 5],
    pub(crate) donts: [&'static str; 5],
}

pub(crate) fn fallback_entry(
    temperament: Temperament,
    language: Language,
) -> &'static FallbackEntry {
    match (temperament, language) {
        (Temperament::Guardian, Language::En) => &GUARDIAN_EN,
        (Temperament::Guardian, Language::Ms) => &GUARDIAN_MS,
        (Temperament::Rational, Language::En) => &RATIONAL_EN,
        (Temperament::Rational, Language::Ms) => &RATIONAL_MS,
        (Temperament::Idealist, Language::En) => &IDEALIST_EN,
        (Temperament::Idealist, Language::Ms) => &IDEALIST_MS,
        (Temperament::Artisan, Language::En) => &ARTISAN_EN,
        (Temperament::Artisan, Language::Ms) => &ARTISAN_MS,
    }
}

static GUARDIAN_EN: FallbackEntry = FallbackEntry {
    strengths: [
        "Strong organizational and planning skills",
        "Reliable and responsible team member",
        "Detail-oriented with high quality standards",
        "Excellent at following established procedures",
        "Natural ability to maintain stability and order",
    ],
    weaknesses: [
        "May resist change or new approaches",
        "Can be overly cautious or risk-averse",
        "Might focus too much on rules over flexibility",
        "May struggle with ambiguity",
        "Can be perceived as inflexible",
    ],
    careers: [
        "Project Manager",
        "Operations Manager",
        "Quality Assurance Specialist",
        "Compliance Officer",
        "Administrative Leadership",
    ],
    dos: [
        "Provide clear instructions and expectations",
        "Respect deadlines and commitments",
        "Use proven methods and best practices",
        "Recognize their reliability and consistency",
        "Give advance notice of changes",
    ],
    donts: [
        "Be vague or change plans without notice",
        "Ignore established procedures",
        "Disregard company hierarchy",
        "Rush decisions without proper planning",
        "Dismiss their attention to detail",
    ],
};

static GUARDIAN_MS: FallbackEntry = FallbackEntry {
    strengths: [
        "Kemahiran organisasi dan perancangan yang kuat",
        "Ahli pasukan yang boleh dipercayai dan bertanggungjawab",
        "Berorientasikan perincian dengan piawaian kualiti tinggi",
        "Cemerlang dalam mengikuti prosedur yang ditetapkan",
        "Keupayaan semula jadi untuk mengekalkan kestabilan dan ketenteraman",
    ],
    weaknesses: [
        "Mungkin menentang perubahan atau pendekatan baru",
        "Boleh terlalu berhati-hati atau mengelak risiko",
        "Mungkin terlalu fokus pada peraturan berbanding fleksibiliti",
        "Mungkin bergelut dengan kekaburan",
        "Boleh dilihat sebagai tidak fleksibel",
    ],
    careers: [
        "Pengurus Projek",
        "Pengurus Operasi",
        "Pakar Jaminan Kualiti",
        "Pegawai Pematuhan",
        "Kepimpinan Pentadbiran",
    ],
    dos: [
        "Berikan arahan dan jangkaan yang jelas",
        "Hormati tarikh akhir dan komitmen",
        "Gunakan kaedah terbukti dan amalan terbaik",
        "Iktiraf kebolehpercayaan dan konsistensi mereka",
        "Beri notis awal tentang perubahan",
    ],
    donts: [
        "Jangan kabur atau ubah rancangan tanpa notis",
        "Abaikan prosedur yang ditetapkan",
        "Abaikan hierarki syarikat",
        "Tergesa-gesa membuat keputusan tanpa perancangan yang betul",
        "Abaikan perhatian mereka terhadap perincian",
    ],
};

static RATIONAL_EN: FallbackEntry = FallbackEntry {
    strengths: [
        "Strategic thinking and long-term planning",
        "Analytical problem-solving abilities",
        "Independent and self-directed",
        "Innovative and intellectually curious",
        "Efficient and logic-driven decision making",
    ],
    weaknesses: [
        "May appear cold or detached",
        "Can overlook emotional factors",
        "Might be overly critical",
        "May struggle with small talk",
        "Can be impatient with inefficiency",
    ],
    careers: [
        "Strategic Analyst",
        "Systems Architect",
        "Research & Development",
        "Technical Leadership",
        "Business Strategy Consultant",
    ],
    dos: [
        "Use data and logic in discussions",
        "Be concise and get to the point",
        "Focus on long-term efficiency",
        "Respect their need for autonomy",
        "Challenge them intellectually",
    ],
    donts: [
        "Use purely emotional arguments",
        "Demand small talk before business",
        "Micromanage their work",
        "Ignore their strategic insights",
        "Present illogical plans",
    ],
};

static RATIONAL_MS: FallbackEntry = FallbackEntry {
    strengths: [
        "Pemikiran strategik dan perancangan jangka panjang",
        "Keupayaan penyelesaian masalah secara analitikal",
        "Bebas dan arahan kendiri",
        "Inovatif dan ingin tahu secara intelektual",
        "Keputusan yang cekap dan didorong oleh logik",
    ],
    weaknesses: [
        "Mungkin kelihatan sejuk atau terpisah",
        "Boleh mengabaikan faktor emosi",
        "Mungkin terlalu kritikal",
        "Mungkin bergelut dengan perbualan ringan",
        "Boleh tidak sabar dengan ketidakcekapan",
    ],
    careers: [
        "Penganalisis Strategik",
        "Arkitek Sistem",
        "Penyelidikan & Pembangunan",
        "Kepimpinan Teknikal",
        "Perunding Strategi Perniagaan",
    ],
    dos: [
        "Gunakan data dan logik dalam perbincangan",
        "Ringkas dan terus ke perkara utama",
        "Fokus pada kecekapan jangka panjang",
        "Hormati keperluan autonomi mereka",
        "Cabar mereka secara intelektual",
    ],
    donts: [
        "Gunakan hujah emosi semata-mata",
        "Menuntut perbualan ringan sebelum perniagaan",
        "Mikrourus kerja mereka",
        "Abaikan pandangan strategik mereka",
        "Bentangkan rancangan yang tidak logik",
    ],
};

static IDEALIST_EN: FallbackEntry = FallbackEntry {
    strengths: [
        "Excellent interpersonal and communication skills",
        "Empathetic and people-focused",
        "Creative and visionary thinking",
        "Strong team building abilities",
        "Authentic and values-driven",
    ],
    weaknesses: [
        "May take criticism personally",
        "Can be overly idealistic",
        "Might avoid necessary conflict",
        "May struggle with hard data focus",
        "Can be indecisive when values clash",
    ],
    careers: [
        "Human Resources",
        "Training & Development",
        "Corporate Communications",
        "Change Management",
        "Employee Relations",
    ],
    dos: [
        "Listen to their ideas and vision",
        "Focus on human growth and development",
        "Be authentic and genuine",
        "Acknowledge their contributions",
        "Support their creative initiatives",
    ],
    donts: [
        "Be cold or impersonal",
        "Ignore impact on people",
        "Use insincere praise",
        "Dismiss their values",
        "Force purely transactional relationships",
    ],
};

static IDEALIST_MS: FallbackEntry = FallbackEntry {
    strengths: [
        "Kemahiran interpersonal dan komunikasi yang cemerlang",
        "Empati dan fokus kepada manusia",
        "Pemikiran kreatif dan berwawasan",
        "Keupayaan membina pasukan yang kuat",
        "Tulen dan didorong oleh nilai",
    ],
    weaknesses: [
        "Mungkin mengambil kritikan secara peribadi",
        "Boleh terlalu idealistik",
        "Mungkin mengelakkan konflik yang perlu",
        "Mungkin bergelut dengan fokus data keras",
        "Boleh ragu-ragu apabila nilai bertembung",
    ],
    careers: [
        "Sumber Manusia",
        "Latihan & Pembangunan",
        "Komunikasi Korporat",
        "Pengurusan Perubahan",
        "Hubungan Pekerja",
    ],
    dos: [
        "Dengar idea dan visi mereka",
        "Fokus pada pertumbuhan dan pembangunan manusia",
        "Jadilah tulen dan jujur",
        "Iktiraf sumbangan mereka",
        "Sokong inisiatif kreatif mereka",
    ],
    donts: [
        "Jangan sejuk atau tidak peribadi",
        "Abaikan kesan kepada manusia",
        "Gunakan pujian tidak ikhlas",
        "Abaikan nilai mereka",
        "Paksa hubungan transaksional semata-mata",
    ],
};

static ARTISAN_EN: FallbackEntry = FallbackEntry {
    strengths: [
        "Adaptable and flexible in dynamic environments",
        "Action-oriented and results-focused",
        "Excellent troubleshooting abilities",
        "Natural crisis management skills",
        "Practical and hands-on approach",
    ],
    weaknesses: [
        "May resist routine or repetitive tasks",
        "Can be impulsive in decision-making",
        "Might struggle with long-term planning",
        "May overlook details in favor of action",
        "Can be easily bored with structure",
    ],
    careers: [
        "Sales & Business Development",
        "Event Management",
        "Emergency Response",
        "Field Operations",
        "Creative Problem Solving Roles",
    ],
    dos: [
        "Give freedom to act and decide",
        "Focus on immediate results",
        "Keep things dynamic and varied",
        "Allow hands-on involvement",
        "Recognize their quick thinking",
    ],
    donts: [
        "Micromanage every step",
        "Force rigid, repetitive routines",
        "Demand extensive documentation",
        "Restrict their autonomy",
        "Ignore their practical insights",
    ],
};

static ARTISAN_MS: FallbackEntry = FallbackEntry {
    strengths: [
        "Boleh menyesuaikan diri dan fleksibel dalam persekitaran dinamik",
        "Berorientasikan tindakan dan fokus hasil",
        "Keupayaan penyelesaian masalah yang cemerlang",
        "Kemahiran pengurusan krisis semula jadi",
        "Pendekatan praktikal dan langsung",
    ],
    weaknesses: [
        "Mungkin menentang tugas rutin atau berulang",
        "Boleh impulsif dalam membuat keputusan",
        "Mungkin bergelut dengan perancangan jangka panjang",
        "Mungkin mengabaikan perincian demi tindakan",
        "Boleh mudah bosan dengan struktur",
    ],
    careers: [
        "Jualan & Pembangunan Perniagaan",
        "Pengurusan Acara",
        "Respons Kecemasan",
        "Operasi Lapangan",
        "Peranan Penyelesaian Masalah Kreatif",
    ],
    dos: [
        "Beri kebebasan untuk bertindak dan memutuskan",
        "Fokus pada hasil segera",
        "Pastikan perkara dinamik dan pelbagai",
        "Benarkan penglibatan langsung",
        "Iktiraf pemikiran pantas mereka",
    ],
    donts: [
        "Mikrourus setiap langkah",
        "Paksa rutin kaku dan berulang",
        "Menuntut dokumentasi yang meluas",
        "Hadkan autonomi mereka",
        "Abaikan pandangan praktikal mereka",
    ],
};
