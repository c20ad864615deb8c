use super::Note;

/// The fixed demo entries as (text, tags). Identifiers are assigned 1..=10 in order.
pub const DEMO_NOTES: [(&str, &str); 10] = [
    ("Запись к врачу терапевту на следующей неделе.", "медицина, врач"),
    ("Консультация у уролога по результатам анализов.", "медицина, врач"),
    ("Купить свежие булки к завтраку.", "еда, продукты"),
    ("Рецепт домашнего хлеба с семенами.", "еда, кулинария"),
    ("Идея для стартапа: приватный ИИ-дневник Aurora.", "бизнес, стартап"),
    ("Встреча с инвесторами в четверг в 15:00.", "бизнес, встреча"),
    ("Начать бегать по утрам для энергии и здоровья.", "здоровье, спорт"),
    ("Нужно больше спать и правильно питаться.", "здоровье, образ жизни"),
    ("Изучить zero-trust архитектуру для проекта Aurora.", "технологии, безопасность"),
    ("Настроить шифрование данных на сервере.", "технологии, программирование"),
];

pub fn demo_notes() -> Vec<Note> {
    DEMO_NOTES
        .iter()
        .zip(1u32..)
        .map(|((text, tags), id)| Note::demo(id, text, tags))
        .collect()
}
