//! Tool definition for composing KTP narratives.

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;
use crate::narrative::StructuredFields;

pub const TOOL_NAME: &str = "susun_narasi_ktp";

/// Arguments for `susun_narasi_ktp`.
#[derive(Debug, Deserialize)]
pub struct SusunNarasiRequest {
    pub documents: Vec<StructuredFields>,
}

/// Get the tool descriptor for MCP tools/list.
pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Menyusun kalimat komparisi (identitas para pihak untuk akta) dari data KTP ",
            "yang sudah diekstrak. Satu kalimat dihasilkan untuk setiap dokumen, sesuai urutan. ",
            "[PENTING] INSTRUKSI PENGGUNAAN: ",
            "(1) Kirim data persis seperti hasil ekstraksi KTP, jangan mengarang data yang tidak terbaca. ",
            "(2) Gelar diisi dalam bentuk panjang (contoh: 'Haji', 'Sarjana Hukum'). ",
            "(3) Tanggal lahir menggunakan format DD-MM-YYYY. ",
            "(4) Jika NIK kosong, tool mengembalikan pesan data tidak lengkap untuk dokumen tersebut."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "documents": {
                "type": "array",
                "description": "Data KTP hasil ekstraksi, satu objek per dokumen",
                "items": {
                    "type": "object",
                    "properties": {
                        "nationalId": { "type": "string", "description": "NIK (16 digit)" },
                        "fullName": { "type": "string", "description": "Nama lengkap tanpa gelar" },
                        "honorificsPrefixExpanded": { "type": "string", "description": "Gelar depan, bentuk panjang" },
                        "honorificsSuffixExpanded": { "type": "string", "description": "Gelar belakang, bentuk panjang" },
                        "birthPlace": { "type": "string", "description": "Tempat lahir" },
                        "birthDate": { "type": "string", "description": "Tanggal lahir (DD-MM-YYYY)" },
                        "gender": { "type": "string", "description": "LAKI-LAKI atau PEREMPUAN" },
                        "address": { "type": "string", "description": "Alamat (bentuk panjang)" },
                        "rt": { "type": "string", "description": "RT" },
                        "rw": { "type": "string", "description": "RW" },
                        "village": { "type": "string", "description": "Kelurahan/Desa" },
                        "district": { "type": "string", "description": "Kecamatan" },
                        "city": { "type": "string", "description": "Kota/Kabupaten" },
                        "maritalStatus": { "type": "string", "description": "BELUM KAWIN, KAWIN, CERAI HIDUP, CERAI MATI" },
                        "occupation": { "type": "string", "description": "Pekerjaan" },
                        "citizenship": { "type": "string", "description": "Kewarganegaraan (WNI/WNA)" }
                    },
                    "required": ["nationalId", "fullName"]
                }
            }
        },
        "required": ["documents"]
    })
}
