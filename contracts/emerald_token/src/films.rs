//! Owner-curated film registry, keyed by title.

use soroban_sdk::{Env, String};

use crate::{
    errors::TokenError,
    storage::{read_film, remove_film, write_film, Film},
};

pub fn add(env: &Env, film: &Film) -> Result<(), TokenError> {
    if film.title.len() == 0 {
        return Err(TokenError::InvalidFilm);
    }
    if read_film(env, &film.title).is_some() {
        return Err(TokenError::FilmExists);
    }
    write_film(env, film);
    Ok(())
}

pub fn delete(env: &Env, title: &String) -> Result<(), TokenError> {
    if read_film(env, title).is_none() {
        return Err(TokenError::FilmNotFound);
    }
    remove_film(env, title);
    Ok(())
}
