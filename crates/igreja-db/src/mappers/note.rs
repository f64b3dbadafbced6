//! Note entity <-> model mapper

use igreja_core::entities::Note;

use crate::models::NoteModel;

/// Convert NoteModel to Note entity
impl From<NoteModel> for Note {
    fn from(model: NoteModel) -> Self {
        Note {
            id: model.id,
            member_id: model.member_id,
            user_id: model.user_id,
            text: model.text,
            date: model.date,
        }
    }
}
