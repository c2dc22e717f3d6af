mod registry;
mod scope;
