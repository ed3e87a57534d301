//! End-to-end runs over a content tree on disk

use std::fs;
use std::path::Path;

use shkola::content::{Post, PostType, Teacher};
use shkola::render::{group_by_department, load_index};
use shkola::Site;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn school() -> (TempDir, Site) {
    let dir = TempDir::new().unwrap();
    let site = Site::new(dir.path()).unwrap();

    write(
        &site.posts_dir,
        "2024-03-01-concert.md",
        "---\ntitle: Spring Concert\ndate: 2024-03-01\ntype: event\n---\n# Big show\nCome join us!",
    );
    write(
        &site.posts_dir,
        "2024-06-10-graduation.md",
        "---\ntitle: \"Випускний\"\ndate: '2024-06-10'\ncover: /img/grad.jpg\nvideo: https://youtu.be/xyz\n---\n![фото](/img/a.jpg)\nДякуємо [усім](https://school.example) гостям!",
    );
    write(&site.posts_dir, "2023-05-01-old.md", "---\ndate: 2023-05-01\n---\n");
    write(&site.posts_dir, "README.txt", "not content");

    write(
        &site.teachers_dir,
        "ivan.md",
        "---\nname: Іван Коваль\ndepartment: Фортепіанний відділ\nrole: Концертмейстер\n---\n",
    );
    write(
        &site.teachers_dir,
        "olena.md",
        "---\nname: Олена Бойко\ndepartment: Художній відділ\nphoto: /img/olena.jpg\n---\nВикладає живопис.",
    );
    write(
        &site.teachers_dir,
        "andrii.md",
        "---\nname: Андрій Шевчук\ndepartment: Художній відділ\n---\n",
    );
    write(&site.teachers_dir, "guest.md", "Запрошений викладач");

    (dir, site)
}

#[test]
fn generates_both_indexes() {
    let (_dir, site) = school();
    site.generate().unwrap();

    let posts: Vec<Post> = load_index(&site.posts_index()).unwrap();
    let dates: Vec<_> = posts.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-06-10", "2024-03-01", "2023-05-01"]);

    let graduation = &posts[0];
    assert_eq!(graduation.title, "Випускний");
    assert_eq!(graduation.kind, PostType::News);
    assert_eq!(graduation.cover, "/img/grad.jpg");
    assert_eq!(graduation.video, "https://youtu.be/xyz");
    assert_eq!(graduation.excerpt, "Дякуємо усім гостям!");
    assert_eq!(posts[2].title, "Без назви");

    let teachers: Vec<Teacher> = load_index(&site.teachers_index()).unwrap();
    let order: Vec<_> = teachers.iter().map(|t| t.slug.as_str()).collect();
    // "Без відділу" < "Фортепіанний…" < "Художній…"
    assert_eq!(order, vec!["guest", "ivan", "andrii", "olena"]);
    assert_eq!(teachers[0].bio, "Запрошений викладач");
    assert_eq!(teachers[0].name, "Без імені");
}

#[test]
fn unknown_departments_are_hidden_from_the_page() {
    let (_dir, site) = school();
    site.generate().unwrap();

    let teachers: Vec<Teacher> = load_index(&site.teachers_index()).unwrap();
    let collation = shkola::content::Collation::new("uk").unwrap();
    let grouped = group_by_department(&teachers, &site.config.departments, &collation);

    assert_eq!(grouped.dropped, 1);
    assert_eq!(grouped.shown(), 3);
    assert_eq!(grouped.get("Художній відділ").unwrap().len(), 2);
}

#[test]
fn regeneration_is_stable_and_complete() {
    let (_dir, site) = school();
    site.generate().unwrap();
    let first = fs::read(site.posts_index()).unwrap();

    site.generate().unwrap();
    assert_eq!(fs::read(site.posts_index()).unwrap(), first);

    // removing a source removes its record on the next run
    fs::remove_file(site.posts_dir.join("2023-05-01-old.md")).unwrap();
    site.generate().unwrap();
    let posts: Vec<Post> = load_index(&site.posts_index()).unwrap();
    assert_eq!(posts.len(), 2);
}
