use serde::Serialize;

use crate::models::assessment::Trait;

/// One Likert item (1 = strongly disagree, 5 = strongly agree).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    #[serde(rename = "trait")]
    pub dimension: Trait,
    /// Reverse-keyed items score `6 - r`.
    pub reverse: bool,
}

const fn q(id: u32, text: &'static str, dimension: Trait) -> Question {
    Question {
        id,
        text,
        dimension,
        reverse: false,
    }
}

pub const QUESTIONS: &[Question] = &[
    q(1, "I prefer to work in groups rather than alone", Trait::Extraversion),
    q(2, "I like to try new and unusual things", Trait::Openness),
    q(3, "I am always prepared and organized", Trait::Conscientiousness),
    q(4, "I am sympathetic to others' feelings", Trait::Agreeableness),
    q(5, "I get easily stressed or anxious", Trait::Neuroticism),
    q(6, "I enjoy being the center of attention", Trait::Extraversion),
    q(7, "I appreciate art and beauty", Trait::Openness),
    q(8, "I stick to my plans and finish what I start", Trait::Conscientiousness),
    q(9, "I trust others easily", Trait::Agreeableness),
    q(10, "I worry about things that might go wrong", Trait::Neuroticism),
    q(11, "I feel comfortable around people", Trait::Extraversion),
    q(12, "I enjoy abstract or theoretical discussions", Trait::Openness),
    q(13, "I am reliable and can be counted on", Trait::Conscientiousness),
    q(14, "I try to be courteous to everyone I meet", Trait::Agreeableness),
    Question {
        id: 15,
        text: "I remain calm under pressure",
        dimension: Trait::Neuroticism,
        reverse: true,
    },
    q(16, "I start conversations with strangers", Trait::Extraversion),
    q(17, "I have a vivid imagination", Trait::Openness),
    q(18, "I pay attention to details", Trait::Conscientiousness),
    q(19, "I am interested in other people's problems", Trait::Agreeableness),
    q(20, "I am easily disturbed by events", Trait::Neuroticism),
];

pub fn find_question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}
