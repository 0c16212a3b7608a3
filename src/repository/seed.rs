//! Default dataset: 20 items and 7 users

use chrono::NaiveDate;

use crate::models::{Item, ItemDetails, User, UserType};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn fiction(id: i32, title: &str, author: &str) -> Item {
    Item::new(id, title, author, ItemDetails::Fiction)
}

fn non_fiction(id: i32, title: &str, author: &str, dewey: &str) -> Item {
    Item::new(
        id,
        title,
        author,
        ItemDetails::NonFiction {
            dewey: dewey.to_string(),
        },
    )
}

fn magazine(id: i32, title: &str, issue: &str, published: NaiveDate) -> Item {
    Item::new(
        id,
        title,
        "Editorial",
        ItemDetails::Magazine {
            issue: issue.to_string(),
            published,
        },
    )
}

fn movie(id: i32, title: &str, director: &str, genre: &str, rating: &str) -> Item {
    Item::new(
        id,
        title,
        director,
        ItemDetails::Movie {
            genre: genre.to_string(),
            rating: rating.to_string(),
        },
    )
}

fn video_game(id: i32, title: &str, studio: &str, genre: &str, rating: &str) -> Item {
    Item::new(
        id,
        title,
        studio,
        ItemDetails::VideoGame {
            genre: genre.to_string(),
            rating: rating.to_string(),
        },
    )
}

/// Five patrons, one librarian and one administrator
pub fn default_users() -> Vec<User> {
    vec![
        User::new(1, "Alice", UserType::Patron),
        User::new(2, "Bob", UserType::Patron),
        User::new(3, "Carol", UserType::Patron),
        User::new(4, "Dave", UserType::Patron),
        User::new(5, "Eve", UserType::Patron),
        User::new(100, "Librarian", UserType::Librarian),
        User::new(101, "Admin", UserType::Admin),
    ]
}

pub fn default_items() -> Vec<Item> {
    vec![
        fiction(101, "The River", "J. Hill"),
        fiction(102, "Night Wind", "S. Li"),
        fiction(103, "Autumn Letters", "M. Patel"),
        fiction(104, "Glass Garden", "R. Gomez"),
        fiction(105, "Silent Harbor", "K. Wu"),
        non_fiction(201, "Deep Space", "A. Chen", "520.10"),
        non_fiction(202, "Human Body Basics", "N. Singh", "612.00"),
        non_fiction(203, "Modern Economics", "T. Adams", "330.01"),
        non_fiction(204, "Wildlife of Sahara", "B. Moore", "599.74"),
        non_fiction(205, "Intro to AI", "L. Turner", "006.30"),
        magazine(301, "Tech Monthly", "Vol. 58 No. 3", date(2025, 3, 1)),
        magazine(302, "Health Weekly", "Issue 742", date(2025, 2, 15)),
        magazine(303, "City Review", "Mar 2025", date(2025, 3, 5)),
        movie(401, "Stars Awake", "Director Q", "Sci-Fi", "PG-13"),
        movie(402, "Broken Ties", "I. Novak", "Drama", "R"),
        movie(403, "Hidden Trails", "C. Rivera", "Thriller", "PG-13"),
        video_game(501, "Sky Quest", "Studio X", "RPG", "E10+"),
        video_game(502, "Circuit Racer", "Pulsar", "Racing", "E"),
        video_game(503, "Dungeon Echoes", "TriForge", "Action RPG", "T"),
        video_game(504, "Harbor Builder", "BrickSoft", "Simulation", "E"),
    ]
}
