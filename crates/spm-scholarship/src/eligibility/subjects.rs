/// Subjects the grade form offers. Hard requirements may only name these.
pub const SUBJECT_CATALOG: [&str; 30] = [
    "Bahasa Melayu",
    "Bahasa Inggeris",
    "Sejarah",
    "Matematik",
    "Matematik Tambahan",
    "Fizik",
    "Kimia",
    "Biologi",
    "Sains",
    "Pendidikan Islam",
    "Pendidikan Moral",
    "Tasawwur Islam",
    "Pendidikan Al-Quran dan Al-Sunnah",
    "Pendidikan Syari'ah Islamiah",
    "Prinsip Perakaunan",
    "Ekonomi",
    "Perniagaan",
    "Sains Komputer",
    "Reka Cipta",
    "Grafik Komunikasi Teknikal",
    "Pendidikan Seni Visual",
    "Sains Rumah Tangga",
    "Pertanian",
    "Bahasa Cina",
    "Bahasa Tamil",
    "Bahasa Arab",
    "Bahasa Iban",
    "Bahasa Kadazandusun",
    "Kesusasteraan Melayu Komunikatif",
    "Kesusasteraan Inggeris",
];

pub fn is_recognized_subject(subject: &str) -> bool {
    SUBJECT_CATALOG.contains(&subject)
}
