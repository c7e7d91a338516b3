//! Maps averaged probabilities to a single [`ComfortLabel`].

use crate::types::comfort_label::ComfortLabel;
use crate::types::hourly_record::Probabilities;

const SEVERE: f64 = 0.5;
const NOTICEABLE: f64 = 0.2;

/// Classifies a day by its averaged probabilities.
///
/// Rules are checked in order and the first match wins:
///
/// 1. `very_uncomfortable > 0.5` => [`ComfortLabel::VeryUncomfortable`]
/// 2. `very_uncomfortable > 0.2` => [`ComfortLabel::Uncomfortable`]
/// 3. `very_hot > 0.5` => [`ComfortLabel::VeryHot`]
/// 4. `very_cold > 0.5` => [`ComfortLabel::VeryCold`]
/// 5. `very_windy > 0.5` => [`ComfortLabel::VeryWindy`]
/// 6. `very_wet > 0.5` => [`ComfortLabel::VeryWet`]
/// 7. otherwise [`ComfortLabel::Comfortable`]
///
/// # Examples
///
/// ```
/// use weather_outlook::{classify, ComfortLabel, Probabilities};
///
/// let probs = Probabilities { very_uncomfortable: 0.6, very_hot: 0.9, ..Default::default() };
/// assert_eq!(classify(&probs), ComfortLabel::VeryUncomfortable);
/// ```
pub fn classify(probs: &Probabilities) -> ComfortLabel {
    if probs.very_uncomfortable > SEVERE {
        ComfortLabel::VeryUncomfortable
    } else if probs.very_uncomfortable > NOTICEABLE {
        ComfortLabel::Uncomfortable
    } else if probs.very_hot > SEVERE {
        ComfortLabel::VeryHot
    } else if probs.very_cold > SEVERE {
        ComfortLabel::VeryCold
    } else if probs.very_windy > SEVERE {
        ComfortLabel::VeryWindy
    } else if probs.very_wet > SEVERE {
        ComfortLabel::VeryWet
    } else {
        ComfortLabel::Comfortable
    }
}
