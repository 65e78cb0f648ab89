use wasm_bindgen::prelude::*;
use pup_engine::*;

mod game;
use game::PupSquad;

pup_web::export_game!(PupSquad, "pupsquad");
