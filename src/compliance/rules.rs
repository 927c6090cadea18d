//! Indonesian information-disclosure rules
//!
//! The table is fixed at build time. Restriction rules (`is_restriction`) can
//! force a document private; the rest only supply the legal basis for publication.

use crate::types::LegalRule;

const UU_KIP: &str = "UU No. 14 Tahun 2008 tentang Keterbukaan Informasi Publik";

struct RuleDef {
    id: &'static str,
    law: &'static str,
    article: &'static str,
    description: &'static str,
    category: &'static str,
    keywords: &'static [&'static str],
    is_restriction: bool,
}

const LEGAL_RULES: &[RuleDef] = &[
    // Public information disclosure (UU KIP)
    RuleDef {
        id: "UU14-2008-ART14",
        law: UU_KIP,
        article: "Pasal 14",
        description: "Setiap Badan Publik wajib menyediakan Informasi Publik yang akurat, benar, dan tidak menyesatkan",
        category: "public_access",
        keywords: &["informasi publik", "transparansi", "akses publik", "keterbukaan"],
        is_restriction: false,
    },
    RuleDef {
        id: "UU14-2008-ART17A",
        law: UU_KIP,
        article: "Pasal 17 huruf (a)",
        description: "Informasi yang dapat menghambat proses penegakan hukum dikecualikan",
        category: "law_enforcement",
        keywords: &["penegakan hukum", "investigasi", "penyelidikan", "proses hukum", "korupsi"],
        is_restriction: true,
    },
    RuleDef {
        id: "UU14-2008-ART17B",
        law: UU_KIP,
        article: "Pasal 17 huruf (b)",
        description: "Informasi yang dapat mengganggu kepentingan perlindungan hak atas kekayaan intelektual dan perlindungan dari persaingan usaha tidak sehat",
        category: "intellectual_property",
        keywords: &["kekayaan intelektual", "persaingan usaha", "rahasia dagang", "paten"],
        is_restriction: true,
    },
    RuleDef {
        id: "UU14-2008-ART17C",
        law: UU_KIP,
        article: "Pasal 17 huruf (c)",
        description: "Informasi yang dapat membahayakan pertahanan dan keamanan negara",
        category: "national_security",
        keywords: &["pertahanan", "keamanan negara", "militer", "intelijen", "rahasia negara"],
        is_restriction: true,
    },
    RuleDef {
        id: "UU14-2008-ART17G",
        law: UU_KIP,
        article: "Pasal 17 huruf (g)",
        description: "Informasi yang dapat menghambat proses penegakan hukum",
        category: "law_enforcement",
        keywords: &["audit internal", "investigasi internal", "pemeriksaan", "dugaan korupsi"],
        is_restriction: true,
    },
    RuleDef {
        id: "UU14-2008-ART17H",
        law: UU_KIP,
        article: "Pasal 17 huruf (h)",
        description: "Informasi yang dapat mengungkap isi akta otentik yang bersifat pribadi dan kemauan terakhir ataupun wasiat seseorang",
        category: "personal_data",
        keywords: &["data pribadi", "akta", "wasiat", "informasi personal", "privasi"],
        is_restriction: true,
    },
    // Population administration
    RuleDef {
        id: "UU23-2006-ART15",
        law: "UU No. 23 Tahun 2006 tentang Administrasi Kependudukan",
        article: "Pasal 15",
        description: "Setiap penduduk mempunyai hak untuk memperoleh dokumen kependudukan",
        category: "population_admin",
        keywords: &["administrasi kependudukan", "dokumen kependudukan", "domisili", "ktp", "kk"],
        is_restriction: false,
    },
    // Regional tax
    RuleDef {
        id: "UU28-2009-ART77",
        law: "UU No. 28 Tahun 2009 tentang Pajak Daerah dan Retribusi Daerah",
        article: "Pasal 77",
        description: "Daerah berwenang untuk mengatur Pajak Bumi dan Bangunan perdesaan dan perkotaan",
        category: "taxation",
        keywords: &["pajak daerah", "PBB", "pajak bumi bangunan", "retribusi", "tarif pajak"],
        is_restriction: false,
    },
    // Housing
    RuleDef {
        id: "UU1-2011-GENERAL",
        law: "UU No. 1 Tahun 2011 tentang Perumahan dan Kawasan Permukiman",
        article: "Ketentuan Umum",
        description: "Pengaturan tentang perumahan dan kawasan permukiman untuk kepentingan publik",
        category: "housing",
        keywords: &["perumahan", "permukiman", "kawasan", "housing", "properti", "tempat tinggal"],
        is_restriction: false,
    },
    // Financial information
    RuleDef {
        id: "BUDGET-RESTRICTION",
        law: UU_KIP,
        article: "Pasal 17 huruf (a)",
        description: "Informasi anggaran yang dapat menghambat proses penegakan hukum atau mengandung strategi khusus",
        category: "budget_restriction",
        keywords: &["anggaran rahasia", "dana khusus", "alokasi sensitif", "operasi khusus"],
        is_restriction: true,
    },
];

/// Built-in legal rule table
pub fn default_legal_rules() -> Vec<LegalRule> {
    LEGAL_RULES
        .iter()
        .map(|def| LegalRule {
            id: def.id.to_string(),
            law: def.law.to_string(),
            article: def.article.to_string(),
            description: def.description.to_string(),
            category: def.category.to_string(),
            keywords: def.keywords.iter().map(|k| k.to_string()).collect(),
            is_restriction: def.is_restriction,
            public_access_allowed: !def.is_restriction,
        })
        .collect()
}
