use maud::{DOCTYPE, Markup, html};

use crate::{entities::movie, media};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn movie_list_page(movie_list: &[movie::Model]) -> String {
    page(
        "Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    h1 class="text-3xl font-bold text-gray-900" { "Movies" }

                    @if movie_list.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies in the catalog yet." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movie_list {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Something went wrong" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back to the catalog" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-6" {
                @if !movie.poster.is_empty() {
                    img class="w-24 rounded" src=(media::media_url(&movie.poster)) alt=(movie.title);
                }
                div {
                    h2 class="text-xl font-semibold text-gray-900" {
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    @if !movie.tagline.is_empty() {
                        p class="mt-1 text-gray-600 italic" { (movie.tagline) }
                    }
                    @if !movie.country.is_empty() {
                        p class="mt-2 text-sm text-gray-500" { (movie.country) }
                    }
                }
            }
        }
    }
}
