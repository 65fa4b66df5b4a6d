use super::super::domain::{Axis, LocalizedText, OptionScoring, Question};

const fn text(en: &'static str, ms: &'static str) -> LocalizedText {
    LocalizedText { en, ms }
}

/// Every item maps option A to the first pole of its axis.
const fn question(
    id: u16,
    axis: Axis,
    text: LocalizedText,
    option_a: LocalizedText,
    option_b: LocalizedText,
) -> Question {
    Question {
        id,
        axis,
        text,
        option_a,
        option_b,
        scoring: OptionScoring::for_axis(axis),
    }
}

pub(super) fn standard_questions() -> Vec<Question> {
    vec![
        question(
            1,
            Axis::Ei,
            text(
                "At a party, you tend to:",
                "Di sebuah pesta, anda cenderung untuk:",
            ),
            text(
                "Interact with many, including strangers",
                "Berinteraksi dengan ramai orang, termasuk orang yang tidak dikenali",
            ),
            text(
                "Interact with a few people you know",
                "Berinteraksi dengan beberapa orang yang anda kenali",
            ),
        ),
        question(
            2,
            Axis::Sn,
            text(
                "You are more likely to trust:",
                "Anda lebih cenderung mempercayai:",
            ),
            text(
                "Your experience and observations",
                "Pengalaman dan pemerhatian anda",
            ),
            text(
                "Your intuition and gut feeling",
                "Intuisi dan perasaan dalaman anda",
            ),
        ),
        question(
            3,
            Axis::Tf,
            text(
                "When making decisions, you typically:",
                "Apabila membuat keputusan, anda biasanya:",
            ),
            text(
                "Rely on logic and objective analysis",
                "Bergantung pada logik dan analisis objektif",
            ),
            text(
                "Consider personal values and how others will be affected",
                "Mempertimbangkan nilai peribadi dan bagaimana orang lain akan terkesan",
            ),
        ),
        question(
            4,
            Axis::Jp,
            text(
                "You prefer to:",
                "Anda lebih suka:",
            ),
            text(
                "Have things decided and settled",
                "Perkara-perkara yang sudah diputuskan dan diselesaikan",
            ),
            text(
                "Keep your options open",
                "Membiarkan pilihan anda terbuka",
            ),
        ),
        question(
            5,
            Axis::Ei,
            text(
                "After spending time with a group of people, you usually feel:",
                "Selepas menghabiskan masa dengan sekumpulan orang, anda biasanya berasa:",
            ),
            text(
                "Energized and stimulated",
                "Bertenaga dan terangsang",
            ),
            text(
                "Drained and needing alone time",
                "Penat dan memerlukan masa bersendirian",
            ),
        ),
        question(
            6,
            Axis::Sn,
            text(
                "When learning something new, you prefer:",
                "Apabila mempelajari sesuatu yang baru, anda lebih suka:",
            ),
            text(
                "Step-by-step instructions with concrete examples",
                "Arahan langkah demi langkah dengan contoh konkrit",
            ),
            text(
                "Understanding the overall concept first",
                "Memahami konsep keseluruhan terlebih dahulu",
            ),
        ),
        question(
            7,
            Axis::Tf,
            text(
                "In a disagreement, you are more likely to:",
                "Dalam perselisihan, anda lebih cenderung untuk:",
            ),
            text(
                "Focus on finding the most logical solution",
                "Fokus untuk mencari penyelesaian yang paling logik",
            ),
            text(
                "Consider everyone's feelings and find harmony",
                "Mempertimbangkan perasaan semua orang dan mencari keharmonian",
            ),
        ),
        question(
            8,
            Axis::Jp,
            text(
                "You tend to work better when:",
                "Anda cenderung bekerja dengan lebih baik apabila:",
            ),
            text(
                "You have a clear plan and schedule",
                "Anda mempunyai rancangan dan jadual yang jelas",
            ),
            text(
                "You can be flexible and adapt as you go",
                "Anda boleh fleksibel dan menyesuaikan diri semasa anda berjalan",
            ),
        ),
        question(
            9,
            Axis::Ei,
            text(
                "When meeting new people, you:",
                "Apabila bertemu orang baru, anda:",
            ),
            text(
                "Easily start conversations and introduce yourself",
                "Mudah memulakan perbualan dan memperkenalkan diri",
            ),
            text(
                "Wait for others to approach you first",
                "Menunggu orang lain menghampiri anda dahulu",
            ),
        ),
        question(
            10,
            Axis::Sn,
            text(
                "You are more interested in:",
                "Anda lebih berminat dengan:",
            ),
            text(
                "What is real and actual",
                "Apa yang nyata dan sebenar",
            ),
            text(
                "What is possible and potential",
                "Apa yang mungkin dan berpotensi",
            ),
        ),
        question(
            11,
            Axis::Tf,
            text(
                "You would rather be seen as:",
                "Anda lebih suka dilihat sebagai:",
            ),
            text(
                "Competent and fair",
                "Kompeten dan adil",
            ),
            text(
                "Caring and compassionate",
                "Penyayang dan penuh belas kasihan",
            ),
        ),
        question(
            12,
            Axis::Jp,
            text(
                "When it comes to deadlines, you typically:",
                "Berkenaan dengan tarikh akhir, anda biasanya:",
            ),
            text(
                "Complete work well ahead of time",
                "Menyelesaikan kerja jauh lebih awal",
            ),
            text(
                "Work best under pressure close to the deadline",
                "Bekerja dengan baik di bawah tekanan hampir dengan tarikh akhir",
            ),
        ),
        question(
            13,
            Axis::Ei,
            text(
                "You prefer to communicate:",
                "Anda lebih suka berkomunikasi:",
            ),
            text(
                "By talking things through with others",
                "Dengan berbincang perkara dengan orang lain",
            ),
            text(
                "By writing or thinking things through alone",
                "Dengan menulis atau memikirkan perkara bersendirian",
            ),
        ),
        question(
            14,
            Axis::Sn,
            text(
                "When reading for pleasure, you prefer:",
                "Apabila membaca untuk keseronokan, anda lebih suka:",
            ),
            text(
                "Realistic stories with practical information",
                "Cerita realistik dengan maklumat praktikal",
            ),
            text(
                "Imaginative stories with deeper meanings",
                "Cerita imaginatif dengan makna yang lebih mendalam",
            ),
        ),
        question(
            15,
            Axis::Tf,
            text(
                "When giving feedback, you tend to be:",
                "Apabila memberi maklum balas, anda cenderung untuk:",
            ),
            text(
                "Direct and straightforward, even if it might hurt",
                "Terus terang dan langsung, walaupun mungkin menyakitkan",
            ),
            text(
                "Tactful and considerate of their feelings",
                "Bijaksana dan mempertimbangkan perasaan mereka",
            ),
        ),
        question(
            16,
            Axis::Jp,
            text(
                "You prefer environments that are:",
                "Anda lebih suka persekitaran yang:",
            ),
            text(
                "Structured and organized",
                "Berstruktur dan teratur",
            ),
            text(
                "Flexible and spontaneous",
                "Fleksibel dan spontan",
            ),
        ),
        question(
            17,
            Axis::Ei,
            text(
                "In your free time, you prefer to:",
                "Pada masa lapang, anda lebih suka:",
            ),
            text(
                "Go out and socialize with friends",
                "Keluar dan bersosial dengan rakan-rakan",
            ),
            text(
                "Stay in and enjoy quiet activities",
                "Tinggal di rumah dan menikmati aktiviti yang tenang",
            ),
        ),
        question(
            18,
            Axis::Sn,
            text(
                "You tend to focus more on:",
                "Anda cenderung untuk lebih fokus pada:",
            ),
            text(
                "The present moment and current realities",
                "Saat ini dan realiti semasa",
            ),
            text(
                "Future possibilities and what could be",
                "Kemungkinan masa depan dan apa yang mungkin",
            ),
        ),
        question(
            19,
            Axis::Tf,
            text(
                "You believe it is more important to:",
                "Anda percaya lebih penting untuk:",
            ),
            text(
                "Be truthful, even if it upsets people",
                "Berkata benar, walaupun ia mengecewakan orang",
            ),
            text(
                "Be tactful, even if it means bending the truth",
                "Bersikap bijaksana, walaupun bermakna memutarbelitkan kebenaran",
            ),
        ),
        question(
            20,
            Axis::Jp,
            text(
                "When planning a vacation, you prefer to:",
                "Apabila merancang percutian, anda lebih suka:",
            ),
            text(
                "Have a detailed itinerary planned in advance",
                "Mempunyai jadual perjalanan terperinci yang dirancang lebih awal",
            ),
            text(
                "Go with the flow and decide as you go",
                "Mengikut arus dan membuat keputusan semasa anda berjalan",
            ),
        ),
        question(
            21,
            Axis::Ei,
            text(
                "You find it easier to:",
                "Anda mendapati lebih mudah untuk:",
            ),
            text(
                "Think out loud and brainstorm with others",
                "Berfikir dengan kuat dan berbincang idea dengan orang lain",
            ),
            text(
                "Reflect quietly and process your thoughts internally",
                "Merenung dengan tenang dan memproses fikiran anda secara dalaman",
            ),
        ),
        question(
            22,
            Axis::Sn,
            text(
                "When solving problems, you prefer to:",
                "Apabila menyelesaikan masalah, anda lebih suka:",
            ),
            text(
                "Use proven methods that have worked before",
                "Menggunakan kaedah yang terbukti berkesan sebelum ini",
            ),
            text(
                "Try new and innovative approaches",
                "Mencuba pendekatan baru dan inovatif",
            ),
        ),
        question(
            23,
            Axis::Tf,
            text(
                "You are more impressed by:",
                "Anda lebih terkesan dengan:",
            ),
            text(
                "Logical and consistent arguments",
                "Hujah yang logik dan konsisten",
            ),
            text(
                "Sincere and heartfelt expressions",
                "Ungkapan yang tulus dan ikhlas",
            ),
        ),
        question(
            24,
            Axis::Jp,
            text(
                "You prefer tasks that:",
                "Anda lebih suka tugas yang:",
            ),
            text(
                "Have clear outcomes and completion points",
                "Mempunyai hasil yang jelas dan titik penyelesaian",
            ),
            text(
                "Are open-ended and evolving",
                "Terbuka dan berkembang",
            ),
        ),
        question(
            25,
            Axis::Ei,
            text(
                "In a group discussion, you typically:",
                "Dalam perbincangan kumpulan, anda biasanya:",
            ),
            text(
                "Speak up frequently and share your ideas",
                "Kerap bersuara dan berkongsi idea anda",
            ),
            text(
                "Listen more and speak when you have something specific to add",
                "Lebih banyak mendengar dan bersuara apabila mempunyai sesuatu yang khusus untuk ditambah",
            ),
        ),
        question(
            26,
            Axis::Sn,
            text(
                "You are more comfortable with:",
                "Anda lebih selesa dengan:",
            ),
            text(
                "Facts and concrete details",
                "Fakta dan butiran konkrit",
            ),
            text(
                "Ideas and abstract concepts",
                "Idea dan konsep abstrak",
            ),
        ),
        question(
            27,
            Axis::Tf,
            text(
                "When a friend is upset, you first want to:",
                "Apabila rakan sedih, anda terlebih dahulu mahu:",
            ),
            text(
                "Help them analyze and solve the problem",
                "Membantu mereka menganalisis dan menyelesaikan masalah",
            ),
            text(
                "Listen and offer emotional support",
                "Mendengar dan menawarkan sokongan emosi",
            ),
        ),
        question(
            28,
            Axis::Jp,
            text(
                "You prefer to make decisions:",
                "Anda lebih suka membuat keputusan:",
            ),
            text(
                "Quickly and move on",
                "Dengan cepat dan teruskan",
            ),
            text(
                "After exploring all possibilities",
                "Selepas meneroka semua kemungkinan",
            ),
        ),
        question(
            29,
            Axis::Ei,
            text(
                "Your ideal weekend involves:",
                "Hujung minggu ideal anda melibatkan:",
            ),
            text(
                "Activities with friends and social events",
                "Aktiviti dengan rakan-rakan dan acara sosial",
            ),
            text(
                "Quiet time at home with personal hobbies",
                "Masa tenang di rumah dengan hobi peribadi",
            ),
        ),
        question(
            30,
            Axis::Sn,
            text(
                "When describing an event, you tend to:",
                "Apabila menerangkan sesuatu peristiwa, anda cenderung untuk:",
            ),
            text(
                "Give specific details about what happened",
                "Memberikan butiran khusus tentang apa yang berlaku",
            ),
            text(
                "Describe the overall impression and meaning",
                "Menerangkan kesan dan makna keseluruhan",
            ),
        ),
        question(
            31,
            Axis::Tf,
            text(
                "You tend to value more:",
                "Anda cenderung lebih menghargai:",
            ),
            text(
                "Justice and fairness",
                "Keadilan dan kesaksamaan",
            ),
            text(
                "Mercy and forgiveness",
                "Belas kasihan dan pengampunan",
            ),
        ),
        question(
            32,
            Axis::Jp,
            text(
                "Your workspace is usually:",
                "Ruang kerja anda biasanya:",
            ),
            text(
                "Neat and organized",
                "Kemas dan teratur",
            ),
            text(
                "Flexible with things in various places",
                "Fleksibel dengan barang-barang di pelbagai tempat",
            ),
        ),
        question(
            33,
            Axis::Ei,
            text(
                "You recharge your energy by:",
                "Anda mengecas semula tenaga dengan:",
            ),
            text(
                "Being around other people",
                "Berada di sekitar orang lain",
            ),
            text(
                "Spending time alone",
                "Menghabiskan masa bersendirian",
            ),
        ),
        question(
            34,
            Axis::Sn,
            text(
                "You prefer to learn through:",
                "Anda lebih suka belajar melalui:",
            ),
            text(
                "Hands-on practice and real examples",
                "Amalan praktikal dan contoh sebenar",
            ),
            text(
                "Theory and conceptual understanding",
                "Teori dan pemahaman konseptual",
            ),
        ),
        question(
            35,
            Axis::Tf,
            text(
                "In making decisions, you give more weight to:",
                "Dalam membuat keputusan, anda memberi lebih berat kepada:",
            ),
            text(
                "Objective facts and evidence",
                "Fakta objektif dan bukti",
            ),
            text(
                "Personal values and relationships",
                "Nilai peribadi dan hubungan",
            ),
        ),
        question(
            36,
            Axis::Jp,
            text(
                "When starting a project, you prefer to:",
                "Apabila memulakan projek, anda lebih suka:",
            ),
            text(
                "Plan everything before beginning",
                "Merancang segala-galanya sebelum bermula",
            ),
            text(
                "Start working and figure it out as you go",
                "Mula bekerja dan memikirkannya semasa anda berjalan",
            ),
        ),
        question(
            37,
            Axis::Ei,
            text(
                "When you have a problem, you prefer to:",
                "Apabila anda mempunyai masalah, anda lebih suka:",
            ),
            text(
                "Talk it through with others",
                "Berbincang dengan orang lain",
            ),
            text(
                "Think it through on your own",
                "Memikirkannya sendiri",
            ),
        ),
        question(
            38,
            Axis::Sn,
            text(
                "You are more likely to notice:",
                "Anda lebih cenderung menyedari:",
            ),
            text(
                "Specific details and practical matters",
                "Butiran khusus dan perkara praktikal",
            ),
            text(
                "Patterns and underlying meanings",
                "Corak dan makna yang mendasari",
            ),
        ),
        question(
            39,
            Axis::Tf,
            text(
                "You are more likely to be bothered by:",
                "Anda lebih cenderung terganggu oleh:",
            ),
            text(
                "Illogical arguments and inconsistencies",
                "Hujah yang tidak logik dan ketidakkonsistenan",
            ),
            text(
                "People being insensitive or unkind",
                "Orang yang tidak peka atau tidak baik hati",
            ),
        ),
        question(
            40,
            Axis::Jp,
            text(
                "You prefer life to be:",
                "Anda lebih suka kehidupan untuk:",
            ),
            text(
                "Planned and predictable",
                "Dirancang dan boleh diramal",
            ),
            text(
                "Flexible and full of surprises",
                "Fleksibel dan penuh dengan kejutan",
            ),
        ),
        question(
            41,
            Axis::Ei,
            text(
                "You would rather:",
                "Anda lebih suka:",
            ),
            text(
                "Have many friends with less deep connections",
                "Mempunyai ramai kawan dengan hubungan yang kurang mendalam",
            ),
            text(
                "Have fewer friends with deeper connections",
                "Mempunyai lebih sedikit kawan dengan hubungan yang lebih mendalam",
            ),
        ),
        question(
            42,
            Axis::Sn,
            text(
                "When considering a new idea, you first ask:",
                "Apabila mempertimbangkan idea baru, anda terlebih dahulu bertanya:",
            ),
            text(
                "Is it practical and achievable?",
                "Adakah ia praktikal dan boleh dicapai?",
            ),
            text(
                "Is it innovative and inspiring?",
                "Adakah ia inovatif dan memberi inspirasi?",
            ),
        ),
        question(
            43,
            Axis::Tf,
            text(
                "Which is a greater compliment?",
                "Yang mana lebih merupakan pujian?",
            ),
            text(
                "Being called very logical",
                "Dipanggil sangat logik",
            ),
            text(
                "Being called very caring",
                "Dipanggil sangat penyayang",
            ),
        ),
        question(
            44,
            Axis::Jp,
            text(
                "When packing for a trip, you tend to:",
                "Apabila mengemas untuk perjalanan, anda cenderung untuk:",
            ),
            text(
                "Make a list and pack in advance",
                "Membuat senarai dan mengemas lebih awal",
            ),
            text(
                "Pack at the last minute",
                "Mengemas pada saat akhir",
            ),
        ),
        question(
            45,
            Axis::Ei,
            text(
                "In conversations, you tend to:",
                "Dalam perbualan, anda cenderung untuk:",
            ),
            text(
                "Speak quickly and think as you talk",
                "Bercakap dengan cepat dan berfikir semasa anda bercakap",
            ),
            text(
                "Think carefully before speaking",
                "Berfikir dengan teliti sebelum bercakap",
            ),
        ),
        question(
            46,
            Axis::Sn,
            text(
                "You prefer instructions that are:",
                "Anda lebih suka arahan yang:",
            ),
            text(
                "Clear, detailed, and step-by-step",
                "Jelas, terperinci, dan langkah demi langkah",
            ),
            text(
                "General guidelines that allow creativity",
                "Garis panduan umum yang membolehkan kreativiti",
            ),
        ),
        question(
            47,
            Axis::Tf,
            text(
                "You are more comfortable with:",
                "Anda lebih selesa dengan:",
            ),
            text(
                "Analyzing problems objectively",
                "Menganalisis masalah secara objektif",
            ),
            text(
                "Understanding how people feel",
                "Memahami perasaan orang",
            ),
        ),
        question(
            48,
            Axis::Jp,
            text(
                "You feel more comfortable when:",
                "Anda berasa lebih selesa apabila:",
            ),
            text(
                "Decisions are made and final",
                "Keputusan dibuat dan muktamad",
            ),
            text(
                "Options are still open",
                "Pilihan masih terbuka",
            ),
        ),
        question(
            49,
            Axis::Ei,
            text(
                "When attending a seminar, you prefer:",
                "Apabila menghadiri seminar, anda lebih suka:",
            ),
            text(
                "Interactive sessions with group discussions",
                "Sesi interaktif dengan perbincangan kumpulan",
            ),
            text(
                "Lectures where you can listen and take notes",
                "Kuliah di mana anda boleh mendengar dan mengambil nota",
            ),
        ),
        question(
            50,
            Axis::Sn,
            text(
                "You prefer to talk about:",
                "Anda lebih suka bercakap tentang:",
            ),
            text(
                "Everyday events and experiences",
                "Peristiwa dan pengalaman harian",
            ),
            text(
                "Ideas, theories, and possibilities",
                "Idea, teori, dan kemungkinan",
            ),
        ),
        question(
            51,
            Axis::Tf,
            text(
                "When making a tough decision, you rely more on:",
                "Apabila membuat keputusan yang sukar, anda lebih bergantung pada:",
            ),
            text(
                "Pros and cons analysis",
                "Analisis kebaikan dan keburukan",
            ),
            text(
                "Your heart and what feels right",
                "Hati anda dan apa yang terasa betul",
            ),
        ),
        question(
            52,
            Axis::Jp,
            text(
                "You prefer to:",
                "Anda lebih suka untuk:",
            ),
            text(
                "Follow a routine and stick to plans",
                "Mengikut rutin dan berpegang pada rancangan",
            ),
            text(
                "Be spontaneous and go with the moment",
                "Bersikap spontan dan mengikut keadaan",
            ),
        ),
        question(
            53,
            Axis::Ei,
            text(
                "You are more likely to be described as:",
                "Anda lebih cenderung digambarkan sebagai:",
            ),
            text(
                "Outgoing and talkative",
                "Ramah dan suka bercakap",
            ),
            text(
                "Reserved and quiet",
                "Pendiam dan tenang",
            ),
        ),
        question(
            54,
            Axis::Sn,
            text(
                "When working on a task, you focus on:",
                "Apabila mengerjakan tugas, anda fokus pada:",
            ),
            text(
                "Getting the details right",
                "Mendapatkan butiran yang betul",
            ),
            text(
                "Seeing the bigger picture",
                "Melihat gambaran yang lebih besar",
            ),
        ),
        question(
            55,
            Axis::Tf,
            text(
                "You find it easier to:",
                "Anda mendapati lebih mudah untuk:",
            ),
            text(
                "Point out flaws in an argument",
                "Menunjukkan kelemahan dalam hujah",
            ),
            text(
                "Appreciate what is good about it",
                "Menghargai apa yang baik tentangnya",
            ),
        ),
        question(
            56,
            Axis::Jp,
            text(
                "When you have a lot to do, you:",
                "Apabila anda mempunyai banyak yang perlu dilakukan, anda:",
            ),
            text(
                "Create a prioritized to-do list",
                "Membuat senarai tugasan mengikut keutamaan",
            ),
            text(
                "Jump in and handle things as they come",
                "Terus masuk dan menangani perkara apabila ia datang",
            ),
        ),
        question(
            57,
            Axis::Ei,
            text(
                "When learning something new, you prefer:",
                "Apabila mempelajari sesuatu yang baru, anda lebih suka:",
            ),
            text(
                "Group classes and collaborative learning",
                "Kelas berkumpulan dan pembelajaran kolaboratif",
            ),
            text(
                "Self-study and individual research",
                "Belajar sendiri dan penyelidikan individu",
            ),
        ),
        question(
            58,
            Axis::Sn,
            text(
                "You prefer to work with:",
                "Anda lebih suka bekerja dengan:",
            ),
            text(
                "Facts and data",
                "Fakta dan data",
            ),
            text(
                "Ideas and concepts",
                "Idea dan konsep",
            ),
        ),
        question(
            59,
            Axis::Tf,
            text(
                "When someone tells you about a problem, you:",
                "Apabila seseorang memberitahu anda tentang masalah, anda:",
            ),
            text(
                "Try to help find a solution",
                "Cuba membantu mencari penyelesaian",
            ),
            text(
                "First acknowledge their feelings",
                "Terlebih dahulu mengakui perasaan mereka",
            ),
        ),
        question(
            60,
            Axis::Jp,
            text(
                "You are more likely to:",
                "Anda lebih cenderung untuk:",
            ),
            text(
                "Finish one project before starting another",
                "Menyelesaikan satu projek sebelum memulakan yang lain",
            ),
            text(
                "Work on multiple projects at once",
                "Bekerja pada beberapa projek sekaligus",
            ),
        ),
        question(
            61,
            Axis::Ei,
            text(
                "In social situations, you tend to:",
                "Dalam situasi sosial, anda cenderung untuk:",
            ),
            text(
                "Make the first move and initiate contact",
                "Membuat langkah pertama dan memulakan hubungan",
            ),
            text(
                "Wait for others to come to you",
                "Menunggu orang lain datang kepada anda",
            ),
        ),
        question(
            62,
            Axis::Sn,
            text(
                "You are more attracted to:",
                "Anda lebih tertarik kepada:",
            ),
            text(
                "What is certain and proven",
                "Apa yang pasti dan terbukti",
            ),
            text(
                "What is new and different",
                "Apa yang baru dan berbeza",
            ),
        ),
        question(
            63,
            Axis::Tf,
            text(
                "You value being known for your:",
                "Anda menghargai dikenali kerana:",
            ),
            text(
                "Clear thinking and competence",
                "Pemikiran yang jelas dan kecekapan",
            ),
            text(
                "Warmth and empathy",
                "Kehangatan dan empati",
            ),
        ),
        question(
            64,
            Axis::Jp,
            text(
                "When it comes to rules, you believe:",
                "Berkenaan dengan peraturan, anda percaya:",
            ),
            text(
                "Rules should be followed for order",
                "Peraturan harus dipatuhi untuk ketertiban",
            ),
            text(
                "Rules should be flexible based on situation",
                "Peraturan harus fleksibel berdasarkan situasi",
            ),
        ),
        question(
            65,
            Axis::Ei,
            text(
                "You feel most comfortable:",
                "Anda berasa paling selesa:",
            ),
            text(
                "In a lively, active environment",
                "Dalam persekitaran yang meriah dan aktif",
            ),
            text(
                "In a calm, quiet environment",
                "Dalam persekitaran yang tenang dan senyap",
            ),
        ),
        question(
            66,
            Axis::Sn,
            text(
                "You would rather be called:",
                "Anda lebih suka dipanggil:",
            ),
            text(
                "Practical and down-to-earth",
                "Praktikal dan realistik",
            ),
            text(
                "Imaginative and visionary",
                "Imaginatif dan berwawasan",
            ),
        ),
        question(
            67,
            Axis::Tf,
            text(
                "In conflicts, you tend to:",
                "Dalam konflik, anda cenderung untuk:",
            ),
            text(
                "Stand firm on what is right",
                "Berpegang teguh pada apa yang betul",
            ),
            text(
                "Seek compromise and harmony",
                "Mencari kompromi dan keharmonian",
            ),
        ),
        question(
            68,
            Axis::Jp,
            text(
                "You prefer activities that are:",
                "Anda lebih suka aktiviti yang:",
            ),
            text(
                "Scheduled and well-organized",
                "Dijadualkan dan teratur",
            ),
            text(
                "Unplanned and spontaneous",
                "Tidak dirancang dan spontan",
            ),
        ),
        question(
            69,
            Axis::Ei,
            text(
                "When working on a project, you prefer:",
                "Apabila mengerjakan projek, anda lebih suka:",
            ),
            text(
                "Working with a team and sharing ideas",
                "Bekerja dengan pasukan dan berkongsi idea",
            ),
            text(
                "Working independently on your own",
                "Bekerja secara bebas sendiri",
            ),
        ),
        question(
            70,
            Axis::Sn,
            text(
                "You tend to remember:",
                "Anda cenderung mengingati:",
            ),
            text(
                "Specific facts and details",
                "Fakta dan butiran khusus",
            ),
            text(
                "General impressions and feelings",
                "Kesan dan perasaan umum",
            ),
        ),
        question(
            71,
            Axis::Tf,
            text(
                "You are more motivated by:",
                "Anda lebih bermotivasi oleh:",
            ),
            text(
                "Achieving goals and accomplishments",
                "Mencapai matlamat dan pencapaian",
            ),
            text(
                "Making others happy and helping them",
                "Membuat orang lain gembira dan membantu mereka",
            ),
        ),
        question(
            72,
            Axis::Jp,
            text(
                "When shopping, you tend to:",
                "Apabila membeli-belah, anda cenderung untuk:",
            ),
            text(
                "Know what you want and buy it quickly",
                "Tahu apa yang anda mahu dan membelinya dengan cepat",
            ),
            text(
                "Browse and explore different options",
                "Melihat-lihat dan meneroka pilihan yang berbeza",
            ),
        ),
        question(
            73,
            Axis::Ei,
            text(
                "You are energized by:",
                "Anda bertenaga oleh:",
            ),
            text(
                "Meeting and talking to new people",
                "Bertemu dan bercakap dengan orang baru",
            ),
            text(
                "Deep conversations with close friends",
                "Perbualan mendalam dengan rakan rapat",
            ),
        ),
        question(
            74,
            Axis::Sn,
            text(
                "When explaining something, you tend to:",
                "Apabila menerangkan sesuatu, anda cenderung untuk:",
            ),
            text(
                "Use specific examples and details",
                "Menggunakan contoh dan butiran khusus",
            ),
            text(
                "Use analogies and metaphors",
                "Menggunakan analogi dan metafora",
            ),
        ),
        question(
            75,
            Axis::Tf,
            text(
                "You are more concerned about:",
                "Anda lebih prihatin tentang:",
            ),
            text(
                "Being right and accurate",
                "Menjadi betul dan tepat",
            ),
            text(
                "Being appreciated and accepted",
                "Dihargai dan diterima",
            ),
        ),
        question(
            76,
            Axis::Jp,
            text(
                "You feel better when you have:",
                "Anda berasa lebih baik apabila anda mempunyai:",
            ),
            text(
                "Finished and completed tasks",
                "Tugas yang telah selesai dan lengkap",
            ),
            text(
                "Started interesting new projects",
                "Memulakan projek baru yang menarik",
            ),
        ),
        question(
            77,
            Axis::Ei,
            text(
                "At work, you prefer:",
                "Di tempat kerja, anda lebih suka:",
            ),
            text(
                "Open workspaces with easy interaction",
                "Ruang kerja terbuka dengan interaksi yang mudah",
            ),
            text(
                "Private spaces where you can focus",
                "Ruang peribadi di mana anda boleh fokus",
            ),
        ),
        question(
            78,
            Axis::Sn,
            text(
                "You prefer tasks that require:",
                "Anda lebih suka tugas yang memerlukan:",
            ),
            text(
                "Attention to detail and precision",
                "Perhatian kepada butiran dan ketepatan",
            ),
            text(
                "Innovation and creative thinking",
                "Inovasi dan pemikiran kreatif",
            ),
        ),
        question(
            79,
            Axis::Tf,
            text(
                "You prefer leaders who:",
                "Anda lebih suka pemimpin yang:",
            ),
            text(
                "Are firm and decisive",
                "Tegas dan pasti",
            ),
            text(
                "Are understanding and supportive",
                "Memahami dan menyokong",
            ),
        ),
        question(
            80,
            Axis::Jp,
            text(
                "When faced with a deadline, you:",
                "Apabila menghadapi tarikh akhir, anda:",
            ),
            text(
                "Plan ahead and finish early",
                "Merancang lebih awal dan menyiapkan lebih awal",
            ),
            text(
                "Often wait until close to the deadline",
                "Sering menunggu sehingga hampir dengan tarikh akhir",
            ),
        ),
        question(
            81,
            Axis::Ei,
            text(
                "When you have exciting news, you:",
                "Apabila anda mempunyai berita yang menarik, anda:",
            ),
            text(
                "Want to tell many people immediately",
                "Ingin memberitahu ramai orang dengan segera",
            ),
            text(
                "Share it with just a few close people",
                "Berkongsi dengan hanya beberapa orang rapat",
            ),
        ),
        question(
            82,
            Axis::Sn,
            text(
                "You would rather be known as:",
                "Anda lebih suka dikenali sebagai:",
            ),
            text(
                "Someone who is reliable and consistent",
                "Seseorang yang boleh dipercayai dan konsisten",
            ),
            text(
                "Someone who is creative and innovative",
                "Seseorang yang kreatif dan inovatif",
            ),
        ),
        question(
            83,
            Axis::Tf,
            text(
                "When evaluating options, you give more weight to:",
                "Apabila menilai pilihan, anda memberi lebih berat kepada:",
            ),
            text(
                "Logical analysis and objective criteria",
                "Analisis logik dan kriteria objektif",
            ),
            text(
                "How the choice will affect people involved",
                "Bagaimana pilihan akan mempengaruhi orang yang terlibat",
            ),
        ),
        question(
            84,
            Axis::Jp,
            text(
                "You prefer to have your schedule:",
                "Anda lebih suka jadual anda:",
            ),
            text(
                "Planned and organized in advance",
                "Dirancang dan disusun lebih awal",
            ),
            text(
                "Open and flexible",
                "Terbuka dan fleksibel",
            ),
        ),
        question(
            85,
            Axis::Ei,
            text(
                "You would rather:",
                "Anda lebih suka:",
            ),
            text(
                "Attend a large party with many people",
                "Menghadiri pesta besar dengan ramai orang",
            ),
            text(
                "Have a small gathering with close friends",
                "Mengadakan perhimpunan kecil dengan rakan rapat",
            ),
        ),
        question(
            86,
            Axis::Sn,
            text(
                "When reading, you prefer:",
                "Apabila membaca, anda lebih suka:",
            ),
            text(
                "Non-fiction and factual information",
                "Bukan fiksyen dan maklumat fakta",
            ),
            text(
                "Fiction and imaginative stories",
                "Fiksyen dan cerita imaginatif",
            ),
        ),
        question(
            87,
            Axis::Tf,
            text(
                "You are more likely to:",
                "Anda lebih cenderung untuk:",
            ),
            text(
                "Be direct even if it causes discomfort",
                "Bersikap terus terang walaupun menyebabkan ketidakselesaan",
            ),
            text(
                "Be diplomatic to avoid hurting feelings",
                "Bersikap diplomatik untuk mengelakkan menyakiti perasaan",
            ),
        ),
        question(
            88,
            Axis::Jp,
            text(
                "When unexpected changes occur, you:",
                "Apabila perubahan yang tidak dijangka berlaku, anda:",
            ),
            text(
                "Feel frustrated and want to get back on track",
                "Berasa kecewa dan ingin kembali ke landasan",
            ),
            text(
                "Adapt easily and see new opportunities",
                "Menyesuaikan diri dengan mudah dan melihat peluang baru",
            ),
        ),
        question(
            89,
            Axis::Ei,
            text(
                "You prefer phone calls that are:",
                "Anda lebih suka panggilan telefon yang:",
            ),
            text(
                "Long and casual conversations",
                "Perbualan panjang dan santai",
            ),
            text(
                "Brief and to the point",
                "Ringkas dan tepat",
            ),
        ),
        question(
            90,
            Axis::Sn,
            text(
                "You prefer to receive information that is:",
                "Anda lebih suka menerima maklumat yang:",
            ),
            text(
                "Detailed and specific",
                "Terperinci dan khusus",
            ),
            text(
                "General and conceptual",
                "Umum dan konseptual",
            ),
        ),
        question(
            91,
            Axis::Tf,
            text(
                "In a debate, you are more focused on:",
                "Dalam perdebatan, anda lebih fokus pada:",
            ),
            text(
                "Winning the argument with logic",
                "Memenangi hujah dengan logik",
            ),
            text(
                "Maintaining good relationships",
                "Mengekalkan hubungan yang baik",
            ),
        ),
        question(
            92,
            Axis::Jp,
            text(
                "You feel more comfortable when things are:",
                "Anda berasa lebih selesa apabila perkara-perkara:",
            ),
            text(
                "Settled and decided",
                "Diselesaikan dan diputuskan",
            ),
            text(
                "Open to change and revision",
                "Terbuka untuk perubahan dan semakan",
            ),
        ),
        question(
            93,
            Axis::Ei,
            text(
                "When solving a difficult problem, you prefer to:",
                "Apabila menyelesaikan masalah yang sukar, anda lebih suka:",
            ),
            text(
                "Discuss it with others to get different perspectives",
                "Membincangkannya dengan orang lain untuk mendapatkan perspektif yang berbeza",
            ),
            text(
                "Work through it alone first",
                "Menyelesaikannya sendiri dahulu",
            ),
        ),
        question(
            94,
            Axis::Sn,
            text(
                "You are more likely to trust:",
                "Anda lebih cenderung mempercayai:",
            ),
            text(
                "What can be measured and proven",
                "Apa yang boleh diukur dan dibuktikan",
            ),
            text(
                "Your inner sense and intuition",
                "Perasaan dalaman dan intuisi anda",
            ),
        ),
        question(
            95,
            Axis::Tf,
            text(
                "You believe success is best measured by:",
                "Anda percaya kejayaan diukur dengan terbaik oleh:",
            ),
            text(
                "Achievement and accomplishments",
                "Pencapaian dan kejayaan",
            ),
            text(
                "Quality of relationships and impact on others",
                "Kualiti hubungan dan kesan terhadap orang lain",
            ),
        ),
        question(
            96,
            Axis::Jp,
            text(
                "When given a task, you prefer to:",
                "Apabila diberi tugas, anda lebih suka:",
            ),
            text(
                "Have clear guidelines and expectations",
                "Mempunyai garis panduan dan jangkaan yang jelas",
            ),
            text(
                "Have freedom to approach it your own way",
                "Mempunyai kebebasan untuk mendekatkannya dengan cara anda sendiri",
            ),
        ),
        question(
            97,
            Axis::Ei,
            text(
                "You consider yourself more:",
                "Anda menganggap diri anda lebih:",
            ),
            text(
                "An expressive and social person",
                "Seorang yang ekspresif dan sosial",
            ),
            text(
                "A reflective and private person",
                "Seorang yang reflektif dan tertutup",
            ),
        ),
        question(
            98,
            Axis::Sn,
            text(
                "You are more interested in discussing:",
                "Anda lebih berminat untuk membincangkan:",
            ),
            text(
                "Practical solutions to real problems",
                "Penyelesaian praktikal untuk masalah sebenar",
            ),
            text(
                "Theoretical possibilities and future ideas",
                "Kemungkinan teori dan idea masa depan",
            ),
        ),
        question(
            99,
            Axis::Tf,
            text(
                "When someone makes a mistake, you first think about:",
                "Apabila seseorang membuat kesilapan, anda terlebih dahulu memikirkan:",
            ),
            text(
                "How to prevent it from happening again",
                "Bagaimana untuk mencegahnya daripada berlaku lagi",
            ),
            text(
                "How the person might be feeling",
                "Bagaimana perasaan orang itu",
            ),
        ),
        question(
            100,
            Axis::Jp,
            text(
                "You are more comfortable when your day is:",
                "Anda lebih selesa apabila hari anda:",
            ),
            text(
                "Planned and structured",
                "Dirancang dan berstruktur",
            ),
            text(
                "Unplanned and open to whatever comes",
                "Tidak dirancang dan terbuka kepada apa sahaja yang datang",
            ),
        ),
    ]
}
