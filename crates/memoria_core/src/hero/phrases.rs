//! Hero caption phrases.

use rand::Rng;

/// Built-in captions, shown before any custom phrase.
pub const DEFAULT_PHRASES: [&str; 30] = [
    "Где тепло живёт вечно.",
    "Бережно хранимое, никогда не забытое.",
    "Тихие отголоски светлых дней.",
    "Тихое место для того, что важно.",
    "Каждый момент — в сохранности.",
    "Как солнечный свет на старых фотографиях.",
    "То, что заставляло тебя улыбаться.",
    "Дом — это чувство, которое ты носишь в себе.",
    "Записано светом, запечатано временем.",
    "Потому что некоторые вещи должны остаться.",
    "Маленькие кусочки вечности.",
    "Время не стирает — оно укрывает.",
    "Каждый день — строчка в нашей истории.",
    "Мы помним, значит мы были.",
    "Светлое живёт дольше всего.",
    "Сквозь годы, сквозь тишину.",
    "Нити, из которых соткано наше тепло.",
    "Пусть ничего не пропадёт напрасно.",
    "Собрано с любовью, сохранено навсегда.",
    "Между строк — целая жизнь.",
    "И через сто лет — всё тот же свет.",
    "Хрупкое, но настоящее.",
    "Мы здесь, пока помним друг друга.",
    "Тихий огонь, что не гаснет.",
    "Любовь не нуждается в словах, но мы всё же запишем.",
    "Одно мгновение стоит тысячи слов.",
    "Нежность, сложенная в архив.",
    "Не забудь — здесь всё настоящее.",
    "Два сердца, одна история.",
    "Акварель чувств на холсте памяти.",
];

/// Built-in phrases followed by custom ones.
pub fn all_phrases(custom: &[String]) -> Vec<&str> {
    DEFAULT_PHRASES
        .iter()
        .copied()
        .chain(custom.iter().map(String::as_str))
        .collect()
}

/// Rotating caption index over [`all_phrases`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhraseRotator {
    index: usize,
}

impl PhraseRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current caption. Wraps when the phrase list shrank.
    pub fn current<'a>(&self, phrases: &[&'a str]) -> Option<&'a str> {
        if phrases.is_empty() {
            return None;
        }
        Some(phrases[self.index % phrases.len()])
    }

    /// Jumps to a uniformly random phrase and returns it.
    pub fn advance<'a, R: Rng + ?Sized>(
        &mut self,
        phrases: &[&'a str],
        rng: &mut R,
    ) -> Option<&'a str> {
        if phrases.is_empty() {
            return None;
        }
        self.index = rng.gen_range(0..phrases.len());
        self.current(phrases)
    }
}

#[cfg(test)]
mod tests {
    use super::{all_phrases, PhraseRotator, DEFAULT_PHRASES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn custom_phrases_follow_defaults() {
        let custom = vec!["ours".to_string()];
        let phrases = all_phrases(&custom);
        assert_eq!(phrases.len(), DEFAULT_PHRASES.len() + 1);
        assert_eq!(phrases.last(), Some(&"ours"));
    }

    #[test]
    fn rotator_starts_at_first_and_stays_in_range() {
        let custom = Vec::new();
        let phrases = all_phrases(&custom);
        let mut rotator = PhraseRotator::new();
        assert_eq!(rotator.current(&phrases), Some(DEFAULT_PHRASES[0]));

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let phrase = rotator.advance(&phrases, &mut rng).expect("phrases exist");
            assert!(phrases.contains(&phrase));
        }
        assert_eq!(rotator.advance(&[], &mut rng), None);
    }
}
